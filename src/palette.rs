/// Random swatch selection for the "add" action.
use flowgrid::Swatch;
use rand::RngExt;

/// Pick `count` swatches independently from the full palette. Repeats are
/// allowed, so a batch may contain the same swatch twice.
pub fn random_batch<R: RngExt>(rng: &mut R, count: usize) -> Vec<Swatch> {
    (0..count)
        .map(|_| Swatch::ALL[rng.random_range(0..Swatch::ALL.len())])
        .collect()
}

/// Same as [`random_batch`], drawing from the thread-local generator.
pub fn random_swatches(count: usize) -> Vec<Swatch> {
    let mut rng = rand::rng();
    random_batch(&mut rng, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_has_requested_length() {
        assert_eq!(random_swatches(2).len(), 2);
        assert!(random_swatches(0).is_empty());
    }

    #[test]
    fn batch_draws_from_palette() {
        for swatch in random_swatches(64) {
            assert!(Swatch::ALL.contains(&swatch));
        }
    }
}
