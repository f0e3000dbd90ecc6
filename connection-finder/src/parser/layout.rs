//! Where things live on the upstream result page.

/// CSS selectors for every region the parser reads.
///
/// Cell selectors are matched inside `results`. When the upstream page
/// changes, a new layout is all that is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Container of the connection overview table
    pub results: String,
    /// First-row cell holding the start station
    pub start: String,
    /// Last-row cell holding the destination station
    pub destination: String,
    /// First-row cell holding the departure time
    pub departure_time: String,
    /// Last-row cell holding the arrival time
    pub arrival_time: String,
    /// First-row cell holding the travel duration
    pub duration: String,
    /// First-row cell holding the products (train types / lines)
    pub product: String,

    /// Error message for an unresolved or ambiguous start station
    pub start_error: String,
    /// Station suggestions offered for the start field
    pub start_candidates: String,
    /// Error message for an unresolved or ambiguous destination station
    pub destination_error: String,
    /// Station suggestions offered for the destination field
    pub destination_candidates: String,
    /// Error message for an invalid date
    pub date_error: String,
    /// Error message for an invalid time.
    /// Always present on the page; only an error when it has text.
    pub time_error: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            results: "#resultsOverview".to_string(),
            start: "tr.firstrow > td.station.first".to_string(),
            destination: "tr.last > td.station.stationDest".to_string(),
            departure_time: "tr.firstrow > td.time".to_string(),
            arrival_time: "tr.last > td.time".to_string(),
            duration: "tr.firstrow > td.duration.lastrow".to_string(),
            product: "tr.firstrow > td.products.lastrow".to_string(),

            start_error: "#errormsg_S".to_string(),
            start_candidates: "select#REQ0JourneyStopsS0K option".to_string(),
            destination_error: "#errormsg_Z".to_string(),
            destination_candidates: "select#REQ0JourneyStopsZ0K option".to_string(),
            date_error: "#errormsg_date".to_string(),
            time_error: "#errormsg_time".to_string(),
        }
    }
}
