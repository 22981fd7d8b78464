use crate::post::PartialPost;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

pub const SLOT_COUNT: usize = 6;

/// Slot index pairs that may be handed over to ads.
pub const AD_SLOT_PAIRS: [(usize, usize); 8] = [(0, 5), (0, 4), (0, 2), (1, 3), (1, 5), (2, 3), (2, 4), (3, 5)];

#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
  Post(PartialPost),
  Ad,
}

impl Slot {
  pub fn is_ad(&self) -> bool {
    matches!(self, Slot::Ad)
  }

  pub fn post(&self) -> Option<&PartialPost> {
    match self {
      Slot::Post(p) => Some(p),
      Slot::Ad => None,
    }
  }
}

pub trait PairPicker {
  fn pick(&mut self, pairs: &[(usize, usize)]) -> Option<(usize, usize)>;
}

pub struct RandomPicker<R>(pub R);

impl RandomPicker<StdRng> {
  pub fn from_seed(seed: u64) -> Self {
    RandomPicker(StdRng::seed_from_u64(seed))
  }
}

impl<R: Rng> PairPicker for RandomPicker<R> {
  fn pick(&mut self, pairs: &[(usize, usize)]) -> Option<(usize, usize)> {
    pairs.choose(&mut self.0).copied()
  }
}

/// Picks up to [`SLOT_COUNT`] posts, preferring ones with a thumbnail, and
/// optionally turns two of them into ad slots.
pub fn select_slots(posts: &[PartialPost], show_ads: bool, picker: &mut impl PairPicker) -> Vec<Slot> {
  let with_thumbnail: Vec<&PartialPost> = posts.iter().filter(|p| p.has_thumbnail()).collect();

  let mut slots: Vec<Slot> = if with_thumbnail.len() < SLOT_COUNT {
    posts.iter().take(SLOT_COUNT).cloned().map(Slot::Post).collect()
  } else {
    with_thumbnail.into_iter().take(SLOT_COUNT).cloned().map(Slot::Post).collect()
  };

  if !show_ads {
    return slots;
  }

  // Indices past the end of a short list are left alone.
  if let Some((first, second)) = picker.pick(&AD_SLOT_PAIRS) {
    for index in [first, second] {
      if let Some(slot) = slots.get_mut(index) {
        *slot = Slot::Ad;
      }
    }
  }

  slots
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::post::sample_post;

  struct FixedPick(usize);

  impl PairPicker for FixedPick {
    fn pick(&mut self, pairs: &[(usize, usize)]) -> Option<(usize, usize)> {
      pairs.get(self.0).copied()
    }
  }

  fn ids(slots: &[Slot]) -> Vec<Option<&str>> {
    slots.iter().map(|s| s.post().map(|p| p.id.as_str())).collect()
  }

  fn pair_index(pair: (usize, usize)) -> usize {
    AD_SLOT_PAIRS.iter().position(|p| *p == pair).unwrap()
  }

  #[test]
  fn prefers_first_six_thumbnailed_posts() {
    let posts: Vec<_> = (0..10).map(|n| sample_post(n, n % 3 != 1)).collect();
    let slots = select_slots(&posts, false, &mut FixedPick(0));
    assert_eq!(
      ids(&slots),
      vec![Some("post-0"), Some("post-2"), Some("post-3"), Some("post-5"), Some("post-6"), Some("post-8")]
    );
  }

  #[test]
  fn sparse_thumbnails_fall_back_to_unfiltered_order() {
    let posts: Vec<_> = (0..7).map(|n| sample_post(n, n != 1 && n != 4)).collect();
    let slots = select_slots(&posts, false, &mut FixedPick(0));
    assert_eq!(
      ids(&slots),
      vec![Some("post-0"), Some("post-1"), Some("post-2"), Some("post-3"), Some("post-4"), Some("post-5")]
    );
  }

  #[test]
  fn ads_disabled_never_produces_ad_slots() {
    for len in 0..9 {
      let posts: Vec<_> = (0..len).map(|n| sample_post(n, n % 2 == 0)).collect();
      let slots = select_slots(&posts, false, &mut RandomPicker::from_seed(len as u64));
      assert_eq!(slots.len(), len.min(SLOT_COUNT));
      assert!(slots.iter().all(|s| !s.is_ad()));
    }
  }

  #[test]
  fn fixed_pair_clears_exactly_those_slots() {
    let posts: Vec<_> = (0..6).map(|n| sample_post(n, true)).collect();
    let slots = select_slots(&posts, true, &mut FixedPick(pair_index((2, 4))));
    assert_eq!(ids(&slots), vec![Some("post-0"), Some("post-1"), None, Some("post-3"), None, Some("post-5")]);
  }

  #[test]
  fn random_pairs_always_come_from_the_table() {
    let posts: Vec<_> = (0..8).map(|n| sample_post(n, true)).collect();
    for seed in 0..200 {
      let slots = select_slots(&posts, true, &mut RandomPicker::from_seed(seed));
      assert_eq!(slots.len(), SLOT_COUNT);
      let cleared: Vec<usize> = slots.iter().enumerate().filter(|(_, s)| s.is_ad()).map(|(i, _)| i).collect();
      assert_eq!(cleared.len(), 2);
      assert!(AD_SLOT_PAIRS.contains(&(cleared[0], cleared[1])));
    }
  }

  #[test]
  fn same_seed_gives_same_placement() {
    let posts: Vec<_> = (0..6).map(|n| sample_post(n, true)).collect();
    let a = select_slots(&posts, true, &mut RandomPicker::from_seed(42));
    let b = select_slots(&posts, true, &mut RandomPicker::from_seed(42));
    assert_eq!(a, b);
  }

  #[test]
  fn out_of_range_pair_indices_are_ignored() {
    let posts: Vec<_> = (0..3).map(|n| sample_post(n, true)).collect();
    let slots = select_slots(&posts, true, &mut FixedPick(pair_index((3, 5))));
    assert_eq!(ids(&slots), vec![Some("post-0"), Some("post-1"), Some("post-2")]);

    let slots = select_slots(&posts, true, &mut FixedPick(pair_index((0, 4))));
    assert_eq!(ids(&slots), vec![None, Some("post-1"), Some("post-2")]);
  }

  #[test]
  fn empty_input_stays_empty() {
    assert!(select_slots(&[], true, &mut FixedPick(0)).is_empty());
  }
}
