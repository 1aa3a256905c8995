//! Embedded sample dataset used when the configured resource cannot be read.

use crate::record::{Dataset, Record};

const CLUSTER: &str = "'Colleagues & Friends & Meeting & New & Product' cluster";

/// Three sample people who recommend each other.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Record::named("Emily Daly")
            .with_email("eagostino@gmail.com")
            .with_first("Jennifer Cogliano", shared_interests("product manager"))
            .with_second("Rashmi Kapur", overlapping_roles("product manager")),
        Record::named("Jennifer Cogliano")
            .with_email("jennifercogliano@gmail.com")
            .with_first("Emily Daly", shared_interests("product manager"))
            .with_second("Matt Landers", overlapping_roles("product designer")),
        Record::named("Matt Landers")
            .with_email("mlanders87@gmail.com")
            .with_first("Rob Winikates", shared_interests("product designer"))
            .with_second("Jennifer Cogliano", overlapping_roles("product manager")),
    ])
}

fn shared_interests(role: &str) -> String {
    format!("Both are in the {CLUSTER}, suggesting shared interests in {role} and networking goals.")
}

fn overlapping_roles(role: &str) -> String {
    format!(
        "Both are in the {CLUSTER}, likely overlapping in roles such as {role} and shared event goals."
    )
}
