use crate::core::{ConfigProvider, ContentElement, FieldClassifier, TextAnalyzer};
use crate::domain::model::{ElementRef, FieldDefinition, FieldKind, Subject, Value};
use crate::utils::error::{ReadTimeError, Result};
use crate::utils::validation::validate_positive_rate;

/// Nested repeaters are followed at most this many levels below the
/// element the computation started from.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Seconds needed to read `words` at `words_per_minute`, floored.
pub fn seconds_for_words(words: usize, words_per_minute: f64) -> u64 {
    let seconds = (words as f64 / words_per_minute * 60.0).floor();
    if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    }
}

/// Walks a content tree and sums the reading time of every leaf field.
pub struct Aggregator<C: FieldClassifier, T: TextAnalyzer> {
    classifier: C,
    analyzer: T,
    words_per_minute: f64,
    max_depth: usize,
}

impl<C: FieldClassifier, T: TextAnalyzer> Aggregator<C, T> {
    pub fn new(classifier: C, analyzer: T, words_per_minute: f64) -> Result<Self> {
        validate_positive_rate("words_per_minute", words_per_minute)?;

        Ok(Self {
            classifier,
            analyzer,
            words_per_minute,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    pub fn from_config<P: ConfigProvider>(classifier: C, analyzer: T, config: &P) -> Result<Self> {
        Ok(Self::new(classifier, analyzer, config.words_per_minute())?
            .with_max_depth(config.max_depth()))
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn words_per_minute(&self) -> f64 {
        self.words_per_minute
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn aggregate(&self, subject: Subject<'_>) -> Result<u64> {
        match subject {
            Subject::Element(element) => self.element_seconds(element, 0),
            Subject::Elements(items) => {
                tracing::info!("List of {} elements provided", items.len());
                self.elements_seconds(items)
            }
            Subject::Scalar(value) => self.value_seconds("", value),
        }
    }

    /// Reading time of a single value, without any traversal.
    pub fn value_seconds(&self, handle: &str, value: &Value) -> Result<u64> {
        let text = self.analyzer.stringify(handle, value)?;
        let words = self.analyzer.count_words(&text);
        let seconds = seconds_for_words(words, self.words_per_minute);
        tracing::trace!("Field '{}': {} words, {} seconds", handle, words, seconds);
        Ok(seconds)
    }

    fn element_seconds(&self, element: &dyn ContentElement, depth: usize) -> Result<u64> {
        let Some(layout) = element.field_layout()? else {
            return Ok(0);
        };

        let mut total = 0;
        for field in &layout {
            total += skip_faults(&field.handle, self.field_seconds(element, field, depth))?;
        }
        Ok(total)
    }

    fn field_seconds(
        &self,
        element: &dyn ContentElement,
        field: &FieldDefinition,
        depth: usize,
    ) -> Result<u64> {
        match self.classifier.classify(field) {
            FieldKind::Scalar => {
                let value = element.field_value(&field.handle)?;
                self.value_seconds(&field.handle, &value)
            }
            FieldKind::SimpleRepeater => {
                let mut total = 0;
                for block in blocks_of(element, &field.handle)? {
                    total += skip_faults(&field.handle, self.leaf_fields_seconds(block.as_ref()))?;
                }
                Ok(total)
            }
            FieldKind::NestedRepeater => {
                if depth >= self.max_depth {
                    tracing::warn!(
                        "Field '{}' is nested deeper than {} levels, skipping",
                        field.handle,
                        self.max_depth
                    );
                    return Err(ReadTimeError::DepthExceeded {
                        handle: field.handle.clone(),
                        max_depth: self.max_depth,
                    });
                }

                let mut total = 0;
                for block in blocks_of(element, &field.handle)? {
                    total += skip_faults(
                        &field.handle,
                        self.element_seconds(block.as_ref(), depth + 1),
                    )?;
                }
                Ok(total)
            }
        }
    }

    /// Every field of the layout is read as text, whatever its kind.
    fn leaf_fields_seconds(&self, element: &dyn ContentElement) -> Result<u64> {
        let Some(layout) = element.field_layout()? else {
            return Ok(0);
        };

        let mut total = 0;
        for field in &layout {
            let seconds = element
                .field_value(&field.handle)
                .and_then(|value| self.value_seconds(&field.handle, &value));
            total += skip_faults(&field.handle, seconds)?;
        }
        Ok(total)
    }

    // Only the top level of each listed element is read; nested repeaters
    // inside them are not descended into.
    fn elements_seconds(&self, items: &[Value]) -> Result<u64> {
        let mut total = 0;
        for element in items.iter().filter_map(Value::as_element) {
            total += skip_faults("", self.leaf_fields_seconds(element.as_ref()))?;
        }
        Ok(total)
    }
}

fn blocks_of(element: &dyn ContentElement, handle: &str) -> Result<Vec<ElementRef>> {
    match element.field_value(handle)? {
        Value::Null => Ok(Vec::new()),
        Value::Element(block) => Ok(vec![block]),
        Value::List(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Element(block) => Some(block),
                _ => None,
            })
            .collect()),
        _ => Err(ReadTimeError::unexpected(handle, "a list of blocks")),
    }
}

/// A recoverable fault turns into a zero contribution; anything else is
/// passed through. Repeaters apply this per block, so a faulty block does
/// not drop the blocks after it.
fn skip_faults(handle: &str, result: Result<u64>) -> Result<u64> {
    match result {
        Err(e) if e.is_recoverable() => {
            tracing::debug!("Skipping field '{}': {}", handle, e);
            Ok(0)
        }
        other => other,
    }
}
