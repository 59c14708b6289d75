/// Report assembly: the optional `system` heading followed by the result
/// table.
use std::io::Write;

use tracing::warn;

use crate::aggregate::{Aggregation, MissingPolicy};
use crate::error::{Error, Result};
use crate::table::{self, Align};

/// Configuration for report rendering.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Decimal places for score and error.
    pub precision: usize,
    /// Separator marker for the benchmark columns. The instance column is
    /// never marked.
    pub align: Align,
    pub missing: MissingPolicy,
    /// Emit `# {system}` when the first record carries a `system` param.
    pub heading: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            align: Align::Default,
            missing: MissingPolicy::Error,
            heading: true,
        }
    }
}

/// Render the whole report as a string.
pub fn render(agg: &Aggregation, config: &ReportConfig) -> Result<String> {
    let header = agg.header();
    let rows = agg.grid(config.precision, config.missing)?;
    if header.len() == 1 && !agg.is_empty() {
        warn!("no benchmark columns left to report");
    }

    let align: Vec<Align> = std::iter::once(Align::Default)
        .chain(std::iter::repeat_n(config.align, header.len() - 1))
        .collect();

    let mut out = String::new();
    if let Some(system) = agg.system().filter(|_| config.heading) {
        out.push_str("# ");
        out.push_str(system);
        out.push_str("\n\n");
    }
    out.push_str(&table::render(&header, &rows, Some(&align)));
    Ok(out)
}

/// Render the report and write it to `w`. Nothing is written when
/// rendering fails.
pub fn write_report<W: Write>(w: &mut W, agg: &Aggregation, config: &ReportConfig) -> Result<()> {
    let report = render(agg, config)?;
    w.write_all(report.as_bytes()).map_err(Error::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_records;
    use pretty_assertions::assert_eq;

    fn report(json: &str, config: &ReportConfig) -> String {
        let records = parse_records(json.as_bytes(), "test").unwrap();
        let agg = Aggregation::from_records(&records).unwrap();
        render(&agg, config).unwrap()
    }

    #[test]
    fn end_to_end_single_record() {
        let json = r#"[{"benchmark":"p.Foo.bar","params":{"instance":"i1"},"primaryMetric":{"score":1.5,"scoreError":0.1}}]"#;
        assert_eq!(
            report(json, &ReportConfig::default()),
            "\
| instance | Foo.bar     |
| -------- | ----------- |
| i1       | 1.50 ± 0.10 |
"
        );
    }

    #[test]
    fn system_heading() {
        let json = r#"[
            {"benchmark":"b.QCIR.read","params":{"instance":"x","system":"i7-8700"},"primaryMetric":{"score":10,"scoreError":"NaN"}}
        ]"#;
        assert_eq!(
            report(json, &ReportConfig::default()),
            "\
# i7-8700

| instance | QCIR.read    |
| -------- | ------------ |
| x        | 10.00 ± 0.00 |
"
        );
    }

    #[test]
    fn heading_can_be_suppressed() {
        let json = r#"[
            {"benchmark":"b.QCIR.read","params":{"instance":"x","system":"i7"},"primaryMetric":{"score":1,"scoreError":0}}
        ]"#;
        let config = ReportConfig {
            heading: false,
            ..Default::default()
        };
        assert!(report(json, &config).starts_with("| instance |"));
    }

    #[test]
    fn aligned_score_columns() {
        let json = r#"[
            {"benchmark":"p.X.m","params":{"instance":"a"},"primaryMetric":{"score":1,"scoreError":0}},
            {"benchmark":"p.Y.m","params":{"instance":"a"},"primaryMetric":{"score":2,"scoreError":0}}
        ]"#;
        let config = ReportConfig {
            align: Align::Right,
            precision: 1,
            ..Default::default()
        };
        assert_eq!(
            report(json, &config),
            "\
| instance | X.m       | Y.m       |
| -------- | --------: | --------: |
| a        | 1.0 ± 0.0 | 2.0 ± 0.0 |
"
        );
    }

    #[test]
    fn missing_result_writes_nothing() {
        let json = r#"[
            {"benchmark":"p.X.m","params":{"instance":"a"},"primaryMetric":{"score":1,"scoreError":0}},
            {"benchmark":"p.Y.m","params":{"instance":"b"},"primaryMetric":{"score":2,"scoreError":0}}
        ]"#;
        let records = parse_records(json.as_bytes(), "test").unwrap();
        let agg = Aggregation::from_records(&records).unwrap();
        let mut out = Vec::new();
        assert!(write_report(&mut out, &agg, &ReportConfig::default()).is_err());
        assert!(out.is_empty());
    }
}
