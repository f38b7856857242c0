//! City tier tables.
//!
//! Membership is a case-sensitive exact match against the lists the model
//! was trained with; any city in neither list is tier 3. The lists are kept
//! byte-for-byte as shipped with the model, repeated entries included.

/// Tier 1: the largest metros.
pub const TIER_1_CITIES: &[&str] = &[
    "Islamabad",
    "Karachi",
    "Lahore",
    "Peshawar",
    "Quetta",
    "Rawalpindi",
    "Faisalabad",
];

/// Tier 2: developed mid-size cities.
pub const TIER_2_CITIES: &[&str] = &[
    "Multan",
    "Gujranwala",
    "Hyderabad",
    "Sialkot",
    "Bahawalpur",
    "Sargodha",
    "Sukkur",
    "Larkana",
    "Sheikhupura",
    "Abbottabad",
    "Jhelum",
    "Gujrat",
    "Mardan",
    "Kasur",
    "Okara",
    "Sahiwal",
    "Turbat",
    "Mingora",
    "Nawabshah",
    "Chiniot",
    "Kohat",
    "Muzaffarabad",
    "Gilgit",
    "Kotli",
    "Skardu",
    "Khuzdar",
    "Bannu",
    "Gwadar",
    "Jhang",
    "Hafizabad",
    "Kamoke",
    "Jacobabad",
    "Shikarpur",
    "Charsadda",
    "Mansehra",
    "Narowal",
    "Vehari",
    "Layyah",
    "Attock",
    "Lodhran",
    "Badin",
    "Khanewal",
    "Bhakkar",
    "Haripur",
    "Swabi",
    "Jamshoro",
    "Gojra",
    "Chakwal",
    "Jaranwala",
    "Khanpur",
    "Kamalia",
    "Daska",
    "Nowshera",
    "Thatta",
    "Pakpattan",
    "Jaccobabad",
    "Samundri",
    "Muridke",
    "Mianwali",
    "Kandhkot",
    "Shahdadpur",
    "Shahkot",
    "Arifwala",
    "Pattoki",
    "Shikarpur",
    "Hangu",
    "Charsadda",
    "Burewala",
    "Jatoi",
];

/// Map a city to its tier.
#[must_use]
pub fn city_tier(city: &str) -> u8 {
    if TIER_1_CITIES.contains(&city) {
        1
    } else if TIER_2_CITIES.contains(&city) {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_membership() {
        assert_eq!(city_tier("Lahore"), 1);
        assert_eq!(city_tier("Multan"), 2);
        assert_eq!(city_tier("Unknown City"), 3);
    }

    #[test]
    fn test_case_sensitive_lookup() {
        assert_eq!(city_tier("lahore"), 3);
        assert_eq!(city_tier("LAHORE"), 3);
        assert_eq!(city_tier("multan"), 3);
    }

    #[test]
    fn test_empty_city_is_tier_3() {
        assert_eq!(city_tier(""), 3);
    }
}
