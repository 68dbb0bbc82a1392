use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Country-name → ISO3 capability. The classification logic only ever sees
/// this trait, so the backing registry can be swapped without touching it.
/// A miss is an absent value, not an error: section headers, region rows and
/// multi-country events all legitimately fail to resolve.
pub trait CountryLookup: Sync {
    fn iso3(&self, name: &str) -> Option<&'static str>;
}

/// Static registry of the country names that appear in the bulletins,
/// keyed exactly as printed (plus the handful of spelling variants the
/// documents alternate between).
pub struct Iso3Registry;

impl CountryLookup for Iso3Registry {
    fn iso3(&self, name: &str) -> Option<&'static str> {
        ISO3_BY_NAME.get(name.trim()).copied()
    }
}

static ISO3_BY_NAME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        ("Algeria", "DZA"),
        ("Angola", "AGO"),
        ("Benin", "BEN"),
        ("Botswana", "BWA"),
        ("Burkina Faso", "BFA"),
        ("Burundi", "BDI"),
        ("Cabo Verde", "CPV"),
        ("Cameroon", "CMR"),
        ("Central African Republic", "CAF"),
        ("Chad", "TCD"),
        ("Comoros", "COM"),
        ("Congo", "COG"),
        ("Republic of Congo", "COG"),
        ("Côte d'Ivoire", "CIV"),
        ("Côte d’Ivoire", "CIV"),
        ("Cote d'Ivoire", "CIV"),
        ("Democratic Republic of the Congo", "COD"),
        ("Democratic Republic of Congo", "COD"),
        ("Djibouti", "DJI"),
        ("Egypt", "EGY"),
        ("Equatorial Guinea", "GNQ"),
        ("Eritrea", "ERI"),
        ("Eswatini", "SWZ"),
        ("Ethiopia", "ETH"),
        ("Gabon", "GAB"),
        ("Gambia", "GMB"),
        ("The Gambia", "GMB"),
        ("Ghana", "GHA"),
        ("Guinea", "GIN"),
        ("Guinea-Bissau", "GNB"),
        ("Kenya", "KEN"),
        ("Lesotho", "LSO"),
        ("Liberia", "LBR"),
        ("Libya", "LBY"),
        ("Madagascar", "MDG"),
        ("Malawi", "MWI"),
        ("Mali", "MLI"),
        ("Mauritania", "MRT"),
        ("Mauritius", "MUS"),
        ("Morocco", "MAR"),
        ("Mozambique", "MOZ"),
        ("Namibia", "NAM"),
        ("Niger", "NER"),
        ("Nigeria", "NGA"),
        ("Rwanda", "RWA"),
        ("Sao Tome and Principe", "STP"),
        ("São Tomé and Príncipe", "STP"),
        ("Senegal", "SEN"),
        ("Seychelles", "SYC"),
        ("Sierra Leone", "SLE"),
        ("Somalia", "SOM"),
        ("South Africa", "ZAF"),
        ("South Sudan", "SSD"),
        ("Sudan", "SDN"),
        ("Tanzania", "TZA"),
        ("United Republic of Tanzania", "TZA"),
        ("Togo", "TGO"),
        ("Tunisia", "TUN"),
        ("Uganda", "UGA"),
        ("Zambia", "ZMB"),
        ("Zimbabwe", "ZWE"),
    ];
    entries.iter().copied().collect()
});
