use crate::constants::{MIN_PLAYERS, TITLE_ERROR, TITLE_NOTICE};
use crate::types::CategoryKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("لازم {} لاعبين على الأقل.", MIN_PLAYERS)]
    NotEnoughPlayers { count: usize },
    #[error("اختر فئة واحدة على الأقل.")]
    NoCategorySelected,
    #[error("قائمة كلمات فئة {category} صغيرة جدًا.")]
    WordListTooSmall { category: CategoryKey },
    #[error("الجولة الحالية لم تنته بعد.")]
    RoundInProgress,
}

impl StartError {
    pub fn title(&self) -> &'static str {
        match self {
            StartError::NotEnoughPlayers { .. }
            | StartError::NoCategorySelected
            | StartError::RoundInProgress => TITLE_NOTICE,
            StartError::WordListTooSmall { .. } => TITLE_ERROR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid words document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read words document: {0}")]
    Io(#[from] std::io::Error),
    #[error("category {} is missing from the dataset", .0.as_str())]
    MissingCategory(CategoryKey),
    #[error("category {} has {len} words, need at least {min}", .category.as_str())]
    TooFewWords {
        category: CategoryKey,
        len: usize,
        min: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("no round is being revealed")]
    NotRevealing,
    #[error("the current player's secret is already shown")]
    SecretAlreadyShown,
    #[error("the current player has not viewed their secret yet")]
    SecretNotShown,
    #[error("the round is not in discussion")]
    NotInDiscussion,
}
