//! The result page parser.

use scraper::{ElementRef, Html, Selector};

use crate::domain::JourneyColumns;

use super::error::ParseError;
use super::layout::PageLayout;
use super::report::{ErrorReport, FieldError, InputField};

/// Compiled form of a [`PageLayout`].
struct Selectors {
    results: Selector,
    start: Selector,
    destination: Selector,
    departure_time: Selector,
    arrival_time: Selector,
    duration: Selector,
    product: Selector,
    start_error: Selector,
    start_candidates: Selector,
    destination_error: Selector,
    destination_candidates: Selector,
    date_error: Selector,
    time_error: Selector,
}

impl Selectors {
    fn compile(layout: &PageLayout) -> Result<Self, ParseError> {
        Ok(Self {
            results: compile(&layout.results)?,
            start: compile(&layout.start)?,
            destination: compile(&layout.destination)?,
            departure_time: compile(&layout.departure_time)?,
            arrival_time: compile(&layout.arrival_time)?,
            duration: compile(&layout.duration)?,
            product: compile(&layout.product)?,
            start_error: compile(&layout.start_error)?,
            start_candidates: compile(&layout.start_candidates)?,
            destination_error: compile(&layout.destination_error)?,
            destination_candidates: compile(&layout.destination_candidates)?,
            date_error: compile(&layout.date_error)?,
            time_error: compile(&layout.time_error)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Reads connections and input errors out of the current result page.
///
/// One parser is kept for a whole run; [`load`](Self::load) swaps in each
/// new response. All other methods only read the loaded page.
pub struct ResultsParser {
    document: Html,
    selectors: Selectors,
}

impl ResultsParser {
    /// Create a parser for the given layout, with an empty page loaded.
    pub fn new(layout: &PageLayout) -> Result<Self, ParseError> {
        Ok(Self {
            document: Html::parse_document(""),
            selectors: Selectors::compile(layout)?,
        })
    }

    /// Replace the current page.
    pub fn load(&mut self, body: &str) {
        self.document = Html::parse_document(body);
    }

    pub fn start_elements(&self) -> Vec<String> {
        self.column(&self.selectors.start)
    }

    pub fn destination_elements(&self) -> Vec<String> {
        self.column(&self.selectors.destination)
    }

    pub fn departure_time_elements(&self) -> Vec<String> {
        self.column(&self.selectors.departure_time)
    }

    pub fn arrival_time_elements(&self) -> Vec<String> {
        self.column(&self.selectors.arrival_time)
    }

    pub fn duration_elements(&self) -> Vec<String> {
        self.column(&self.selectors.duration)
    }

    pub fn product_elements(&self) -> Vec<String> {
        self.column(&self.selectors.product)
    }

    /// All six columns of the current page.
    pub fn columns(&self) -> JourneyColumns {
        JourneyColumns {
            start: self.start_elements(),
            destination: self.destination_elements(),
            departure: self.departure_time_elements(),
            arrival: self.arrival_time_elements(),
            duration: self.duration_elements(),
            product: self.product_elements(),
        }
    }

    /// Input errors the server reported for the search, if any.
    ///
    /// Station and date errors count when their region is on the page. The
    /// time error region is always on the page and only counts when it has
    /// text.
    pub fn check_for_errors(&self) -> Option<ErrorReport> {
        let s = &self.selectors;
        let mut errors = Vec::new();

        if let Some(region) = self.first(&s.start_error) {
            errors.push(FieldError {
                field: InputField::Start,
                message: text_of(region),
                candidates: self.texts(&s.start_candidates),
            });
        }

        if let Some(region) = self.first(&s.destination_error) {
            errors.push(FieldError {
                field: InputField::Destination,
                message: text_of(region),
                candidates: self.texts(&s.destination_candidates),
            });
        }

        if let Some(region) = self.first(&s.date_error) {
            errors.push(FieldError {
                field: InputField::Date,
                message: text_of(region),
                candidates: Vec::new(),
            });
        }

        if let Some(region) = self.first(&s.time_error) {
            let message = text_of(region);
            if !message.is_empty() {
                errors.push(FieldError {
                    field: InputField::Time,
                    message,
                    candidates: Vec::new(),
                });
            }
        }

        ErrorReport::new(errors)
    }

    fn column(&self, cell: &Selector) -> Vec<String> {
        self.document
            .select(&self.selectors.results)
            .flat_map(|container| container.select(cell))
            .map(text_of)
            .collect()
    }

    fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.document.select(selector).next()
    }

    fn texts(&self, selector: &Selector) -> Vec<String> {
        self.document
            .select(selector)
            .map(text_of)
            .filter(|t| !t.is_empty())
            .collect()
    }
}
