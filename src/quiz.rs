use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Category id the frontend sends when a round should draw from every
/// category.
pub const ALL_CATEGORIES: i64 = 0;

/// Picks one question uniformly at random among those whose id is not in
/// `previous`. Returns `None` when the round has exhausted the pool.
pub fn pick_unseen<'a, R: Rng>(
    questions: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = questions
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    unseen.choose(rng).copied()
}
