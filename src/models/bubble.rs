// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Question bubble data structures.
//!
//! A bubble is a draggable, editable annotation carrying one question and a
//! center-point position local to the image container. Bubbles are created
//! in one batch when an image is loaded and cleared together with it.

use std::collections::HashMap;

/// Stable identifier for a bubble, derived from its seeding index.
pub type BubbleId = String;

/// One floating question bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    /// Question text; editable after creation.
    pub question: String,
    /// Center-point x, in pixels relative to the image container.
    pub x: f32,
    /// Center-point y, in pixels relative to the image container.
    pub y: f32,
}

impl Bubble {
    fn new(index: usize, question: String, x: f32, y: f32) -> Self {
        Self {
            id: format!("bubble-{index}"),
            question,
            x,
            y,
        }
    }
}

/// The bubble collection for the current image session.
///
/// Bubbles are addressed by id; lookup goes through a map so that moving or
/// editing one bubble never touches the others. The seeding order is kept
/// separately to make rendering deterministic.
#[derive(Debug, Default)]
pub struct BubbleSet {
    by_id: HashMap<BubbleId, Bubble>,
    order: Vec<BubbleId>,
}

impl BubbleSet {
    /// Seed one bubble per question at the given center-point positions.
    ///
    /// `questions` and `positions` are paired by index; extra positions are
    /// ignored, missing ones skip the question.
    pub fn seed<S: Into<String>>(
        questions: impl IntoIterator<Item = S>,
        positions: &[(f32, f32)],
    ) -> Self {
        let mut set = Self::default();
        for (i, (question, &(x, y))) in questions.into_iter().zip(positions).enumerate() {
            let bubble = Bubble::new(i, question.into(), x, y);
            set.order.push(bubble.id.clone());
            set.by_id.insert(bubble.id.clone(), bubble);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Bubble> {
        self.by_id.get(id)
    }

    /// Iterate bubbles in seeding order.
    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Translate one bubble by a drag delta. Unknown ids are a no-op.
    pub fn move_by(&mut self, id: &str, dx: f32, dy: f32) {
        if let Some(bubble) = self.by_id.get_mut(id) {
            bubble.x += dx;
            bubble.y += dy;
        }
    }

    /// Replace one bubble's question text, leaving its position untouched.
    /// Unknown ids are a no-op.
    pub fn set_question(&mut self, id: &str, text: String) {
        if let Some(bubble) = self.by_id.get_mut(id) {
            bubble.question = text;
        }
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> BubbleSet {
        BubbleSet::seed(
            ["first?", "second?", "third?"],
            &[(10.0, 20.0), (30.0, 40.0), (50.0, 60.0)],
        )
    }

    #[test]
    fn test_seed_creates_one_bubble_per_question() {
        let set = sample_set();
        assert_eq!(set.len(), 3);

        let ids: Vec<_> = set.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, vec!["bubble-0", "bubble-1", "bubble-2"]);

        let first = set.get("bubble-0").unwrap();
        assert_eq!(first.question, "first?");
        assert_eq!((first.x, first.y), (10.0, 20.0));
    }

    #[test]
    fn test_move_touches_only_the_target() {
        let mut set = sample_set();
        let before: Vec<Bubble> = set.iter().cloned().collect();

        set.move_by("bubble-1", 5.5, -2.5);

        let moved = set.get("bubble-1").unwrap();
        assert_eq!(moved.x, before[1].x + 5.5);
        assert_eq!(moved.y, before[1].y - 2.5);
        assert_eq!(set.get("bubble-0").unwrap(), &before[0]);
        assert_eq!(set.get("bubble-2").unwrap(), &before[2]);
    }

    #[test]
    fn test_edit_preserves_position_and_neighbors() {
        let mut set = sample_set();
        let before: Vec<Bubble> = set.iter().cloned().collect();

        set.set_question("bubble-2", "rewritten".to_string());

        let edited = set.get("bubble-2").unwrap();
        assert_eq!(edited.question, "rewritten");
        assert_eq!((edited.x, edited.y), (before[2].x, before[2].y));
        assert_eq!(set.get("bubble-0").unwrap().question, "first?");
        assert_eq!(set.get("bubble-1").unwrap().question, "second?");
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let mut set = sample_set();
        let before: Vec<Bubble> = set.iter().cloned().collect();

        set.move_by("bubble-99", 1.0, 1.0);
        set.set_question("nope", "ignored".to_string());

        let after: Vec<Bubble> = set.iter().cloned().collect();
        assert_eq!(after, before);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut set = sample_set();
        set.clear();
        assert!(set.is_empty());
        assert!(set.get("bubble-0").is_none());
    }
}
