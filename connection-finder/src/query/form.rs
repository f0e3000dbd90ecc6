//! The upstream search form.

use super::QueryParams;

/// Every control of the upstream search form with the values the server
/// expects, percent-decoded.
///
/// The server rejects or misbehaves on missing fields, so this list is kept
/// in step with the live form rather than trimmed to what looks relevant.
/// One key appears twice, as it does on the form; it is sent once.
pub const BASELINE: &[(&str, &str)] = &[
    ("HWAI=QUERY!rit", "no"),
    ("queryPageDisplayed", "yes"),
    ("HWAI=QUERY!displayed", "yes"),
    ("HWAI=JS!ajax", "yes"),
    ("HWAI=JS!js", "yes"),
    ("REQ0JourneyStopsS0A", "255"),
    ("ignoreTypeCheck", "yes"),
    ("REQ0JourneyStopsS0a", "131072"),
    ("REQ0JourneyStopsZ0A", "255"),
    ("REQ0JourneyStopsZ0o", "8"),
    ("REQ0JourneyStopsZ0a", "131072"),
    ("REQ1JourneyDate", ""),
    ("REQ1JourneyTime", ""),
    ("REQ1HafasSearchForw", "1"),
    ("REQ0JourneyRevia", "yes"),
    ("HWAI=QUERY$via$0!number", "0"),
    ("REQ0JourneyStops1ID", ""),
    ("REQ0JourneyStops2ID", ""),
    ("HWAI=QUERY$via$1!number", "0"),
    ("REQ1JourneyStops1ID", ""),
    ("REQ1JourneyStops2ID", ""),
    ("HWAI=QUERY!prodAdvanced", "0"),
    ("existOptimizePrice", "1"),
    ("REQ0HafasOptimize1", "0:1"),
    ("existProductNahverkehr", "1"),
    ("HWAI=QUERY$PRODUCTS$0_0!show", "yes"),
    ("HWAI=QUERY$PRODUCTS$0_0!show", "yes"),
    ("advancedProductMode", "yes"),
    ("REQ0JourneyProduct_prod_section_0_0", "1"),
    ("REQ0JourneyProduct_prod_section_0_1", "1"),
    ("REQ0JourneyProduct_prod_section_0_2", "1"),
    ("REQ0JourneyProduct_prod_section_0_3", "1"),
    ("REQ0JourneyProduct_prod_section_0_4", "1"),
    ("REQ0JourneyProduct_prod_section_0_5", "1"),
    ("REQ0JourneyProduct_prod_section_0_6", "1"),
    ("REQ0JourneyProduct_prod_section_0_7", "1"),
    ("REQ0JourneyProduct_prod_section_0_8", "1"),
    ("REQ0JourneyProduct_prod_section_0_9", "1"),
    ("REQ0JourneyProduct_opt_section_0_list", "0:0000"),
    ("existProductAutoReturn", "yes"),
    ("REQ0HafasChangeTime", "0:1"),
    ("existIntermodalDep_enable", "yes"),
    ("REQ0JourneyDep__enable", "Foot"),
    ("existIntermodalDest_enable", "yes"),
    ("REQ0JourneyDest__enable", "Foot"),
    ("HWAI=QUERY!hideExtInt", "no"),
    ("REQ0JourneyDep_Foot_minDist", "0"),
    ("REQ0JourneyDest_Foot_minDist", "0"),
    ("REQ0JourneyDep_Foot_maxDist", "2000"),
    ("REQ0JourneyDest_Foot_maxDist", "2000"),
    ("REQ0JourneyDep_Bike_minDist", "0"),
    ("REQ0JourneyDest_Bike_minDist", "0"),
    ("REQ0JourneyDep_Bike_maxDist", "5000"),
    ("REQ0JourneyDest_Bike_maxDist", "5000"),
    ("REQ0JourneyDep_KissRide_minDist", "2000"),
    ("REQ0JourneyDest_KissRide_minDist", "2000"),
    ("REQ0JourneyDep_KissRide_maxDist", "50000"),
    ("REQ0JourneyDest_KissRide_maxDist", "50000"),
    ("travelProfile", ""),
    ("traveller_Nr", "1"),
    ("REQ0Tariff_TravellerType.1", "E"),
    ("REQ0Tariff_TravellerReductionClass.1", "0"),
    ("REQ0Tariff_TravellerAge.1", ""),
    ("REQ0Tariff_Class", "2"),
    ("existOptionBits", "yes"),
    ("rtMode", "12"),
    ("start", "Suchen"),
];

const START_KEY: &str = "REQ0JourneyStopsS0G";
const DESTINATION_KEY: &str = "REQ0JourneyStopsZ0G";
const DATE_KEY: &str = "REQ0JourneyDate";
const TIME_KEY: &str = "REQ0JourneyTime";
const DIRECTION_KEY: &str = "REQ0HafasSearchForw";

/// Baseline form fields merged with a query.
#[derive(Debug, Clone, Copy)]
pub struct FormTemplate {
    baseline: &'static [(&'static str, &'static str)],
}

impl FormTemplate {
    pub fn new(baseline: &'static [(&'static str, &'static str)]) -> Self {
        Self { baseline }
    }

    /// The request body for `query`.
    ///
    /// Baseline fields keep their order and a repeated baseline key is sent
    /// once with its last value. Query fields replace baseline fields of the
    /// same name; those not in the baseline follow it.
    pub fn build(&self, query: &QueryParams) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = Vec::with_capacity(self.baseline.len() + 5);
        for (key, value) in self.baseline {
            set(&mut fields, key, value);
        }

        set(&mut fields, START_KEY, &query.start);
        set(&mut fields, DESTINATION_KEY, &query.destination);
        set(&mut fields, TIME_KEY, &query.time);
        set(&mut fields, DATE_KEY, &query.date);
        set(&mut fields, DIRECTION_KEY, query.direction.form_flag());
        fields
    }
}

impl Default for FormTemplate {
    fn default() -> Self {
        Self::new(BASELINE)
    }
}

fn set(fields: &mut Vec<(String, String)>, key: &str, value: &str) {
    match fields.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value.to_string(),
        None => fields.push((key.to_string(), value.to_string())),
    }
}
