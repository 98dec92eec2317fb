use scratchpad_utils::config_file::Config;
use scratchpad_utils::grid::Grid;
use scratchpad_utils::sampling::{rng_from_seed, repeated_choice, sample_unique, values_of};
use scratchpad_utils::Error;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_grid() {
        let grid = Grid::from_rows(vec![vec![1i64, 2, 3, 4, 5], vec![6, 7, 8, 9, 10]]).unwrap();
        let report = grid.report();

        assert_eq!(report.ndim(), 2);
        assert_eq!(grid.shape(), &[2, 5]);
        assert_eq!(report.element_byte_size, 8);
    }

    #[test]
    fn test_demo_mapping_sample() {
        let config = Config::default();
        let values = values_of(config.mapping());
        let mut rng = rng_from_seed(Some(1234));

        let sample = sample_unique(&mut rng, &values, 3).unwrap();
        assert_eq!(sample.len(), 3);
        let distinct: HashSet<String> = sample.iter().map(|v| v.to_string()).collect();
        assert_eq!(distinct.len(), 3);
        assert!(sample.iter().all(|v| values.contains(v)));
    }

    #[test]
    fn test_demo_items_sample() {
        let items: Vec<i32> = (1..=10).map(|i| i * 10).collect();
        let mut rng = rng_from_seed(None);

        let sample = sample_unique(&mut rng, &items, 3).unwrap();
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.iter().collect::<HashSet<_>>().len(), 3);
        assert!(sample.iter().all(|v| items.contains(v)));

        let too_many = sample_unique(&mut rng, &items, 11);
        assert_eq!(
            too_many.unwrap_err(),
            Error::SampleSize { requested: 11, available: 10 }
        );
    }

    #[test]
    fn test_choice_and_sample_are_distinct() {
        let items = vec![1, 2];
        let mut rng = rng_from_seed(Some(8));

        assert!(sample_unique(&mut rng, &items, 3).is_err());
        assert_eq!(repeated_choice(&mut rng, &items, 3).unwrap().len(), 3);
    }
}
