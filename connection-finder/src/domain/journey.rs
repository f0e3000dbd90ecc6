//! Journey rows and the result set they accumulate into.

use serde::Serialize;

use super::ColumnMismatch;

/// One connection found by the upstream planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyRow {
    pub start_station: String,
    pub destination_station: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub product: String,
}

impl JourneyRow {
    /// The fields in display order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.start_station,
            &self.destination_station,
            &self.departure_time,
            &self.arrival_time,
            &self.duration,
            &self.product,
        ]
    }
}

/// The parallel columns of one result page.
///
/// Entry `i` of every column belongs to the same connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyColumns {
    pub start: Vec<String>,
    pub destination: Vec<String>,
    pub departure: Vec<String>,
    pub arrival: Vec<String>,
    pub duration: Vec<String>,
    pub product: Vec<String>,
}

impl JourneyColumns {
    /// Zip the columns into rows.
    ///
    /// Fails if the columns differ in length; pairing them anyway would mix
    /// fields of different connections.
    pub fn into_rows(self) -> Result<Vec<JourneyRow>, ColumnMismatch> {
        let len = self.start.len();
        let lengths = [
            self.destination.len(),
            self.departure.len(),
            self.arrival.len(),
            self.duration.len(),
            self.product.len(),
        ];
        if lengths.iter().any(|&l| l != len) {
            return Err(ColumnMismatch {
                start: len,
                destination: self.destination.len(),
                departure: self.departure.len(),
                arrival: self.arrival.len(),
                duration: self.duration.len(),
                product: self.product.len(),
            });
        }

        let rows = self
            .start
            .into_iter()
            .zip(self.destination)
            .zip(self.departure)
            .zip(self.arrival)
            .zip(self.duration)
            .zip(self.product)
            .map(
                |(((((start, destination), departure), arrival), duration), product)| JourneyRow {
                    start_station: start,
                    destination_station: destination,
                    departure_time: departure,
                    arrival_time: arrival,
                    duration,
                    product,
                },
            )
            .collect();
        Ok(rows)
    }
}

/// Connections gathered over all requests of a run, in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    rows: Vec<JourneyRow>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the rows of one page.
    pub fn extend(&mut self, rows: impl IntoIterator<Item = JourneyRow>) {
        self.rows.extend(rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[JourneyRow] {
        &self.rows
    }

    /// Departure time of the most recently fetched connection.
    pub fn latest_departure(&self) -> Option<&str> {
        self.rows.last().map(|row| row.departure_time.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(prefix: &str, departures: &[&str]) -> JourneyColumns {
        let col = |field: &str| -> Vec<String> {
            (0..departures.len())
                .map(|i| format!("{prefix}-{field}-{i}"))
                .collect()
        };
        JourneyColumns {
            start: col("start"),
            destination: col("dest"),
            departure: departures.iter().map(|s| s.to_string()).collect(),
            arrival: col("arr"),
            duration: col("dur"),
            product: col("prod"),
        }
    }

    #[test]
    fn rows_keep_fields_together() {
        let rows = columns("a", &["14:00", "14:37"]).into_rows().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].start_station, "a-start-1");
        assert_eq!(rows[1].destination_station, "a-dest-1");
        assert_eq!(rows[1].departure_time, "14:37");
        assert_eq!(rows[1].arrival_time, "a-arr-1");
        assert_eq!(rows[1].duration, "a-dur-1");
        assert_eq!(rows[1].product, "a-prod-1");
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let mut cols = columns("a", &["14:00", "14:37"]);
        cols.product.pop();

        let err = cols.into_rows().unwrap_err();
        assert_eq!(err.start, 2);
        assert_eq!(err.product, 1);
    }

    #[test]
    fn appending_pages_preserves_alignment() {
        let mut results = ResultSet::new();
        results.extend(columns("a", &["14:00", "14:37"]).into_rows().unwrap());
        results.extend(columns("b", &["14:38", "15:02"]).into_rows().unwrap());

        assert_eq!(results.len(), 4);
        for row in results.rows() {
            let prefix = &row.start_station[..1];
            let index = &row.start_station[row.start_station.len() - 1..];
            for field in [&row.destination_station, &row.arrival_time, &row.duration] {
                assert!(field.starts_with(prefix));
                assert!(field.ends_with(index));
            }
        }
        assert_eq!(results.latest_departure(), Some("15:02"));
    }

    #[test]
    fn empty_set_has_no_latest_departure() {
        let results = ResultSet::new();
        assert!(results.is_empty());
        assert_eq!(results.latest_departure(), None);
    }

    #[test]
    fn serializes_as_array() {
        let mut results = ResultSet::new();
        results.extend(columns("a", &["14:00"]).into_rows().unwrap());

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[0]["departure_time"], "14:00");
        assert_eq!(json[0]["product"], "a-prod-0");
    }
}
