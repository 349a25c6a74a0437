// Dropdown option catalog.
//
// The reference dataset is read once at startup purely to populate the
// form's select options; it plays no part in prediction. When the file is
// absent the catalog falls back to the enumerations the model was trained
// on, so the form always renders.

use anyhow::{anyhow, Result};
use csv::ReaderBuilder;
use shared::models::Make;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCatalog {
    pub makes: Vec<Make>,
    pub models: Vec<String>,
    pub trims: Vec<String>,
    pub body_types: Vec<String>,
    pub provinces: Vec<String>,
}

impl VehicleCatalog {
    /// Derive the option lists from the reference CSV: distinct values per
    /// column in first-seen order. Header names must match the training
    /// dataset's columns.
    pub fn from_csv(file_path: impl AsRef<Path>) -> Result<VehicleCatalog> {
        let path = file_path.as_ref();
        let file = File::open(path)
            .map_err(|e| anyhow!("Failed to open dataset '{}': {}", path.display(), e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let column = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| anyhow!("Dataset '{}' has no '{}' column", path.display(), name))
        };

        let model_col = column("model")?;
        let trim_col = column("trim")?;
        let body_type_col = column("body_type")?;
        let province_col = column("province")?;

        let mut models: Vec<String> = Vec::new();
        let mut trims: Vec<String> = Vec::new();
        let mut body_types: Vec<String> = Vec::new();
        let mut provinces: Vec<String> = Vec::new();

        fn push_distinct(values: &mut Vec<String>, value: &str) {
            let value = value.trim();
            if !value.is_empty() && !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }

        for (idx, result) in rdr.records().enumerate() {
            let record =
                result.map_err(|e| anyhow!("Error reading dataset record at line {}: {}", idx + 2, e))?;
            push_distinct(&mut models, record.get(model_col).unwrap_or(""));
            push_distinct(&mut trims, record.get(trim_col).unwrap_or(""));
            push_distinct(&mut body_types, record.get(body_type_col).unwrap_or(""));
            push_distinct(&mut provinces, record.get(province_col).unwrap_or(""));
        }

        if models.is_empty() {
            return Err(anyhow!("Dataset '{}' contains no rows", path.display()));
        }

        Ok(VehicleCatalog {
            makes: Make::ALL.to_vec(),
            models,
            trims,
            body_types,
            provinces,
        })
    }

    /// The literal enumerations from the training dataset, used when no
    /// reference CSV is available at runtime.
    pub fn builtin() -> VehicleCatalog {
        VehicleCatalog {
            makes: Make::ALL.to_vec(),
            models: to_strings(&[
                "Prius", "Highlander", "Civic", "Accord", "Corolla", "Ridgeline", "Odyssey",
                "CR-V", "Pilot", "Camry Solara", "Matrix", "RAV4", "Rav4", "HR-V", "Fit",
                "Yaris", "Yaris iA", "Tacoma", "Camry", "Avalon", "Venza", "Sienna", "Passport",
                "Accord Crosstour", "Crosstour", "Element", "Tundra", "Sequoia",
                "Corolla Hatchback", "4Runner", "Echo", "Tercel", "MR2 Spyder", "FJ Cruiser",
                "Corolla iM", "C-HR", "Civic Hatchback", "86", "S2000", "Supra", "Insight",
                "Clarity", "CR-Z", "Prius Prime", "Prius Plug-In", "Prius c", "Prius C",
                "Prius v",
            ]),
            trims: to_strings(&[
                "Base", "Three Touring", "Touring", "Two", "L Eco", "Four", "II", "Three",
                "XLE", "Limited", "LE", "IV", "Persona Series", "One", "Standard", "Five",
                "III", "LE AWD-e", "XLE AWD-e", "Limited Hybrid", "Hybrid", "SE", "Plus",
                "LE Plus", "Limited Platinum", "Platinum", "Sport", "XSE", "LX", "EX",
                "VALUE PACKAGE", "DX", "VP", "LX-S", "EX-L", "EX-T", "Si", "SI", "HYBRID",
                "Hybrid CVT SULEV", "EX Leather", "EX-L V6", "3.0 EX", "EX LEATHER", "EX V6",
                "EX-L V-6", "Touring V6", "3.0 LX", "Hybrid Touring", "B1", "CE", "XRS",
                "LE Eco", "LE Eco Premium", "VE", "S", "L", "LE Special Edition",
                "50th Anniversary Special Edition", "S Plus", "LE Premium", "Special Edition",
                "S Premium", "RT", "RTS", "RTL", "RTX", "RTL-E", "Black Edition",
                "Touring Elite", "Elite", "SPECIAL EDITION", "SLE", "XR", "Adventure",
                "PreRunner", "TRD Sport", "TRD Off Road", "SR", "TRD Pro", "SR5", "SE Sport",
                "LE V6", "SE V6", "XLE V6", "SE Nightshade", "XLE Hybrid", "SE Hybrid",
                "LE Hybrid", "Avalon", "XLS", "XLE Limited", "XLE Premium", "Limited Premium",
                "SE Premium", "EX-P", "SC", "1794 Edition", "Tundra Grade", "SR5 V6",
                "V6 LIMITED", "LIMITED", "Night Shade", "SR5 Premium", "Off-Road",
                "TRD Off-Road Premium", "Trail", "Venture", "Sport Touring", "Type-R",
                "860 Special Edition", "TRD SE", "GT", "A91 Edition", "Premium",
                "Launch Edition", "Advanced",
            ]),
            body_types: to_strings(&[
                "sedan", "hatchback", "suv", "coupe", "pickup", "minivan", "convertible",
                "wagon", "crossover", "mini_mpv",
            ]),
            provinces: to_strings(&[
                "NB", "QC", "BC", "ON", "AB", "MB", "SK", "NS", "PE", "NL", "YT", "NC", "OH",
                "SC",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
