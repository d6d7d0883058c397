use crate::prelude::Real;
use getset::Getters;

/// An observed time series with a chronological label index.
///
/// The index usually carries report dates. Its ordering is significant and
/// is preserved through every transform.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct DatedSeries {
    name: String,
    index: Vec<String>,
    values: Vec<Real>,
}

impl DatedSeries {
    /// Pair a label index with its observations.
    pub fn new(name: impl Into<String>, index: Vec<String>, values: Vec<Real>) -> Self {
        assert_eq!(index.len(), values.len(), "index and values must align");
        DatedSeries {
            name: name.into(),
            index,
            values,
        }
    }

    /// A series indexed by day number, for data without report dates.
    pub fn from_values(name: impl Into<String>, values: Vec<Real>) -> Self {
        let index = (0..values.len()).map(|i| i.to_string()).collect();
        DatedSeries::new(name, index, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all observations.
    pub fn sum(&self) -> Real {
        self.values.iter().sum()
    }

    /// Render as a two-column CSV document.
    pub fn render_csv(&self, sep: char) -> String {
        let mut data = format!("date{}{}", sep, self.name);
        for (label, value) in self.index.iter().zip(&self.values) {
            data.push('\n');
            data.push_str(label);
            data.push(sep);
            data.push_str(&format!("{}", value));
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_numbers_stand_in_for_missing_dates() {
        let series = DatedSeries::from_values("counts", vec![4.0, 5.0, 6.0]);
        assert_eq!(series.index(), &["0", "1", "2"]);
        assert_eq!(series.sum(), 15.0);
    }

    #[test]
    fn renders_the_index_alongside_the_values() {
        let series = DatedSeries::new(
            "deaths",
            vec!["2020-03-11".into(), "2020-03-12".into()],
            vec![1.0, 2.0],
        );
        assert_eq!(series.render_csv(','), "date,deaths\n2020-03-11,1\n2020-03-12,2");
    }
}
