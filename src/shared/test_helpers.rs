#[cfg(test)]
use crate::features::regions::RegionService;
#[cfg(test)]
use crate::modules::dataset::Dataset;

/// Small hierarchy: Aceh, DKI Jakarta and Jawa Barat with a few descendants
/// down to village level, grouped depth-first like the real dataset.
#[cfg(test)]
pub const SAMPLE_REGIONS: &[(&str, &str)] = &[
    ("11", "Aceh"),
    ("11.01", "Kabupaten Aceh Selatan"),
    ("11.01.01", "Bakongan"),
    ("11.01.01.2001", "Keude Bakongan"),
    ("11.01.01.2002", "Ujong Mangki"),
    ("11.01.02", "Kluet Utara"),
    ("11.71", "Kota Banda Aceh"),
    ("31", "DKI Jakarta"),
    ("31.71", "Kota Administrasi Jakarta Pusat"),
    ("31.71.01", "Gambir"),
    ("31.71.01.1001", "Gambir"),
    ("31.71.01.1002", "Cideng"),
    ("31.74", "Kota Administrasi Jakarta Selatan"),
    ("32", "Jawa Barat"),
    ("32.04", "Kabupaten Bandung"),
    ("32.73", "Kota Bandung"),
    ("32.73.01", "Sukasari"),
];

#[cfg(test)]
pub fn sample_dataset() -> Dataset {
    Dataset::from_pairs(SAMPLE_REGIONS.iter().copied())
        .expect("sample regions form a valid dataset")
}

#[cfg(test)]
pub fn sample_service() -> RegionService {
    RegionService::from_dataset(sample_dataset())
}

/// Directory holding the dataset files shipped with the crate
#[cfg(test)]
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
