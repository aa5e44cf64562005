// Fixed game limits and every user-facing string. All text is Arabic and meant to be
// rendered right-to-left; none of it is configurable at runtime.
pub const GAME_NAME: &str = "من المندس؟";
pub const GAME_TAGLINE: &str = "اختر الفئات، أضف لاعبين، وابدأ الجولة.";
pub const MIN_PLAYERS: usize = 3;
pub const MIN_WORDS_PER_CATEGORY: usize = 4;

pub const HEADING_CATEGORIES: &str = "1) اختيار الفئات";
pub const HEADING_PLAYERS: &str = "2) اللاعبون";
pub const HEADING_REVEAL: &str = "مرحلة الكشف (بالتناوب)";
pub const HEADING_DISCUSSION: &str = "النقاش والتصويت";
pub const HEADING_IMPOSTOR: &str = "المندس";

pub const LABEL_TURN_OF: &str = "الدور على";
pub const LABEL_PLAYER: &str = "اللاعب";
pub const LABEL_CATEGORY: &str = "الفئة";
pub const LABEL_WORD: &str = "الكلمة";
pub const IMPOSTOR_NOTICE: &str = "أنت المندس";

pub const NOTE_HAND_OVER: &str = "سلّم الجوال لهذا اللاعب. اضغط “عرض الكلمة” فقط عندما يكون جاهزًا.";
pub const NOTE_MEMORIZE: &str = "احفظها ثم اضغط “التالي” وسلم الجوال للي بعدك.";
pub const NOTE_DISCUSS: &str = "جميع اللاعبين عرفوا أدوارهم. ابدأوا نقاش، وصوتوا من المندسّ.";

pub const BUTTON_ADD: &str = "إضافة";
pub const BUTTON_REMOVE: &str = "حذف";
pub const BUTTON_START: &str = "ابدأ جولة جديدة";
pub const BUTTON_SHOW_WORD: &str = "عرض الكلمة";
pub const BUTTON_NEXT: &str = "التالي";
pub const BUTTON_END_ROUND: &str = "إنهاء الجولة والعودة للإعداد";
pub const BUTTON_SHOW_IMPOSTOR: &str = "عرض المندس";
pub const BUTTON_REPLAY: &str = "جولة جديدة (نفس اللاعبين والفئات)";
pub const BUTTON_BACK_TO_SETUP: &str = "رجوع للإعداد";
pub const BUTTON_DISMISS: &str = "تمام";

pub const TITLE_NOTICE: &str = "سلامات صاحبي";
pub const TITLE_ERROR: &str = "خطأ";
pub const TITLE_CONFIRM: &str = "تأكيد";
pub const CONFIRM_RESET_BODY: &str =
    "هل تريد فعلاً إنهاء الجولة والرجوع للإعداد؟ سيتم فقدان الجولة الحالية.";
pub const CONFIRM_RESET_YES: &str = "نعم، إنهاء";
pub const CONFIRM_CANCEL: &str = "إلغاء";
