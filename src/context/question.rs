//! Question contexts and their classifiers

use crate::lexicon::{well_known, DictionaryItem};
use serde::{Deserialize, Serialize};

/// Classification of a question token. At most one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    Who,
    What,
    When,
    Where,
    Why,
    How,
    Are,
    Can,
    If,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 9] = [
        QuestionKind::Who,
        QuestionKind::What,
        QuestionKind::When,
        QuestionKind::Where,
        QuestionKind::Why,
        QuestionKind::How,
        QuestionKind::Are,
        QuestionKind::Can,
        QuestionKind::If,
    ];

    /// The well-known token this kind is recognized by.
    pub fn token(self) -> &'static str {
        match self {
            QuestionKind::Who => well_known::WHO,
            QuestionKind::What => well_known::WHAT,
            QuestionKind::When => well_known::WHEN,
            QuestionKind::Where => well_known::WHERE,
            QuestionKind::Why => well_known::WHY,
            QuestionKind::How => well_known::HOW,
            QuestionKind::Are => well_known::ARE,
            QuestionKind::Can => well_known::CAN,
            QuestionKind::If => well_known::IF,
        }
    }

    /// Case-insensitive match of the folded token against the well-known words.
    pub fn classify(question: &DictionaryItem) -> Option<QuestionKind> {
        let folded = question.folded();
        QuestionKind::ALL
            .into_iter()
            .find(|kind| folded == kind.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionContext {
    question: DictionaryItem,
    kind: Option<QuestionKind>,
}

impl QuestionContext {
    pub fn new(question: DictionaryItem) -> Self {
        let kind = QuestionKind::classify(&question);
        Self { question, kind }
    }

    pub fn question(&self) -> &DictionaryItem {
        &self.question
    }

    /// `None` for question tokens outside the well-known set.
    pub fn kind(&self) -> Option<QuestionKind> {
        self.kind
    }

    pub fn is_who(&self) -> bool {
        self.kind == Some(QuestionKind::Who)
    }

    pub fn is_what(&self) -> bool {
        self.kind == Some(QuestionKind::What)
    }

    pub fn is_when(&self) -> bool {
        self.kind == Some(QuestionKind::When)
    }

    pub fn is_where(&self) -> bool {
        self.kind == Some(QuestionKind::Where)
    }

    pub fn is_why(&self) -> bool {
        self.kind == Some(QuestionKind::Why)
    }

    pub fn is_how(&self) -> bool {
        self.kind == Some(QuestionKind::How)
    }

    pub fn is_are(&self) -> bool {
        self.kind == Some(QuestionKind::Are)
    }

    pub fn is_can(&self) -> bool {
        self.kind == Some(QuestionKind::Can)
    }

    pub fn is_if(&self) -> bool {
        self.kind == Some(QuestionKind::If)
    }
}
