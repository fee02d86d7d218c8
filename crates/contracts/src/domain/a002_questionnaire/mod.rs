pub mod aggregate;
pub mod draft;

pub use aggregate::{
    Questionnaire, QuestionnaireCategory, QuestionnaireFacet, QuestionnaireSortKey,
    QuestionnaireStats, QuestionnaireStatus,
};
pub use draft::QuestionnaireDraft;
