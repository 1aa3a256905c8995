use netrec_rs_core::{Dataset, Record};

/// The single-record dataset used by the lookup scenarios.
pub fn emily_dataset() -> Dataset {
    Dataset::new(vec![
        Record::named("Emily Daly")
            .with_first("Jennifer Cogliano", "shared cluster")
            .with_second("Rashmi Kapur", "shared cluster 2"),
    ])
}

/// Several people whose names share the fragment "jen".
pub fn overlapping_dataset() -> Dataset {
    Dataset::new(vec![
        Record::named("Rashmi Kapur").with_first("Emily Daly", "met at the mixer"),
        Record::named("Jenna Ortiz").with_first("Matt Landers", "both designers"),
        Record::named("Jennifer Cogliano").with_first("Emily Daly", "same cluster"),
        Record::named("Benjen Stark"),
    ])
}
