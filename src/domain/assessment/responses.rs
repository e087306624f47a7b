//! Response Store - answers keyed by question id.

use serde::Serialize;

use crate::domain::catalog::Question;
use crate::domain::foundation::{QuestionId, Rating};

/// A single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: QuestionId,
    pub rating: Rating,
}

/// An ordered collection of responses with at most one entry per question.
///
/// Core and module answers are kept in separate sets. Insertion order is
/// preserved for display and export; sums do not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseSet {
    entries: Vec<Response>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rating, replacing any earlier rating for the same question.
    ///
    /// Returns the rating that was replaced, if any.
    pub fn record(&mut self, question_id: QuestionId, rating: Rating) -> Option<Rating> {
        match self.entries.iter_mut().find(|r| r.question_id == question_id) {
            Some(existing) => Some(std::mem::replace(&mut existing.rating, rating)),
            None => {
                self.entries.push(Response { question_id, rating });
                None
            }
        }
    }

    /// Returns the rating recorded for a question.
    pub fn rating_for(&self, question_id: QuestionId) -> Option<Rating> {
        self.entries
            .iter()
            .find(|r| r.question_id == question_id)
            .map(|r| r.rating)
    }

    /// Rating for a question, with unanswered questions counting as zero.
    pub fn rating_or_zero(&self, question_id: QuestionId) -> u32 {
        self.rating_for(question_id)
            .map(|r| u32::from(r.value()))
            .unwrap_or(0)
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.rating_for(question_id).is_some()
    }

    /// Sums ratings of the given questions. Unanswered questions add nothing.
    pub fn sum_ratings<I>(&self, question_ids: I) -> u32
    where
        I: IntoIterator<Item = QuestionId>,
    {
        question_ids
            .into_iter()
            .map(|id| self.rating_or_zero(id))
            .sum()
    }

    /// Sums ratings for a slice of catalog questions.
    pub fn sum_for(&self, questions: &[Question]) -> u32 {
        self.sum_ratings(questions.iter().map(Question::id))
    }

    /// Questions from the given list that have no rating yet.
    pub fn missing<'a>(&self, questions: &'a [Question]) -> Vec<&'a Question> {
        questions.iter().filter(|q| !self.contains(q.id())).collect()
    }

    /// Number of answers among the given questions.
    pub fn answered_among(&self, questions: &[Question]) -> usize {
        questions.iter().filter(|q| self.contains(q.id())).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a Response;
    type IntoIter = std::slice::Iter<'a, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
