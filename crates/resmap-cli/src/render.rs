use crate::cli::OutputFormat;
use crate::error::Result;
use resmap::core::classification::color::classify;
use resmap::core::classification::matcher::matching_categories;
use resmap::core::classification::palette::ColorScheme;
use resmap::core::classification::rules::{ColorClass, FILTER_CATEGORIES};
use resmap::core::models::Dataset;
use resmap::core::models::series::trend_totals;
use resmap::engine::slot::{LoadStatus, ResourceKind};
use resmap::engine::store::StoreState;
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionRow {
    pub source: String,
    pub target: String,
    pub consistency: f64,
    pub frames: u32,
    pub class: &'static str,
    pub color: String,
    pub types: String,
    /// Filter categories the record matches, `;`-separated.
    pub categories: String,
}

pub fn interaction_rows(state: &StoreState) -> Vec<InteractionRow> {
    state
        .filtered_interactions()
        .into_iter()
        .map(|record| {
            let label = record.type_label();
            let categories = matching_categories(&label)
                .iter()
                .map(|rule| rule.id)
                .collect::<Vec<_>>()
                .join(";");
            InteractionRow {
                source: record.source_id().to_string(),
                target: record.target_id().to_string(),
                consistency: record.consistency,
                frames: record.frame_count,
                class: classify(&label).id(),
                color: state.color_for(record).to_string(),
                types: label,
                categories,
            }
        })
        .collect()
}

pub fn write_interactions(
    rows: &[InteractionRow],
    format: OutputFormat,
    mut out: impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_interaction_table(rows, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_interaction_table(rows: &[InteractionRow], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<14} {:<14} {:>11} {:>6}  {:<16} {:<28} TYPES",
        "SOURCE", "TARGET", "CONSISTENCY", "FRAMES", "CLASS", "COLOR"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<14} {:<14} {:>11.2} {:>6}  {:<16} {:<28} {}",
            row.source, row.target, row.consistency, row.frames, row.class, row.color, row.types
        )?;
    }
    writeln!(out, "{} interaction(s)", rows.len())
}

pub fn write_datasets(datasets: &[Dataset], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{:<24} {:<24} {:>7}", "ID", "NAME", "FRAMES")?;
    for dataset in datasets {
        writeln!(
            out,
            "{:<24} {:<24} {:>7}",
            dataset.id, dataset.name, dataset.frames
        )?;
    }
    Ok(())
}

fn write_slot(
    f: &mut fmt::Formatter<'_>,
    state: &StoreState,
    kind: ResourceKind,
    detail: &str,
) -> fmt::Result {
    let name = kind.name();
    match (state.status(kind), state.error(kind)) {
        (LoadStatus::Failed, Some(message)) => writeln!(f, "{:<13} failed: {}", name, message),
        (LoadStatus::Loading, _) => writeln!(f, "{:<13} loading", name),
        (LoadStatus::Idle, _) => writeln!(f, "{:<13} not requested", name),
        _ => writeln!(f, "{:<13} loaded, {}", name, detail),
    }
}

/// Per-resource load report of one store snapshot.
pub struct Summary<'a>(pub &'a StoreState);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let name = state
            .current_dataset
            .as_ref()
            .map_or("(none)", |d| d.name.as_str());
        writeln!(f, "Dataset: {} ({} frames)", name, state.total_frames())?;

        let records = state.interactions.payload();
        let detail = format!(
            "{} records, {} pass the current filter",
            records.len(),
            state.filtered_interactions().len()
        );
        write_slot(f, state, ResourceKind::Interactions, &detail)?;

        let frames = state.area.payload();
        let mean_bsa = if frames.is_empty() {
            0.0
        } else {
            frames.iter().map(|frame| frame.total_bsa).sum::<f64>() / frames.len() as f64
        };
        let detail = format!("{} frames, mean total BSA {:.1}", frames.len(), mean_bsa);
        write_slot(f, state, ResourceKind::Area, &detail)?;

        let trends = state.trends.payload();
        let detail = format!("{} categories", trends.len());
        write_slot(f, state, ResourceKind::Trends, &detail)?;
        for (label, total) in trend_totals(trends) {
            writeln!(f, "  {:<24} {:>8}", label, total)?;
        }
        Ok(())
    }
}

/// Filter categories and the color classes of one scheme.
pub struct CategoryListing<'a>(pub &'a ColorScheme);

impl fmt::Display for CategoryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.0;
        writeln!(f, "Filter categories:")?;
        for rule in FILTER_CATEGORIES {
            writeln!(
                f,
                "  {:<12} {:<18} {}",
                rule.id,
                rule.label,
                rule.keywords.join(", ")
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Color classes ({} scheme, highest priority first):", scheme.id)?;
        for class in ColorClass::PRIORITY {
            let [r, g, b] = scheme.color(class);
            writeln!(
                f,
                "  {:<16} #{:02x}{:02x}{:02x}  {}",
                class.id(),
                r,
                g,
                b,
                class.keywords().join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resmap::core::classification::palette::scheme_or_default;
    use resmap::core::models::{AreaFrame, InteractionRecord, TrendSeries};

    fn record(types: &[&str], consistency: f64) -> InteractionRecord {
        InteractionRecord {
            res_name1: "LYS".to_string(),
            res_num1: 5,
            chain1: "A".to_string(),
            res_name2: "GLU".to_string(),
            res_num2: 77,
            chain2: "B".to_string(),
            frame_count: 9,
            consistency,
            id1: "A-LYS5".to_string(),
            id2: "B-GLU77".to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn state_with(records: Vec<InteractionRecord>) -> StoreState {
        let mut state = StoreState::default();
        state.interactions.begin();
        state.interactions.settle(Ok(records));
        state
    }

    #[test]
    fn rows_follow_filter_and_carry_colors() {
        let state = state_with(vec![
            record(&["Salt-bridge", "H-bond"], 0.5),
            record(&["Salt-bridge"], 0.9),
        ]);
        let rows = interaction_rows(&state);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].class, "salt-bridge");
        assert!(rows[0].color.starts_with("rgba(255, 59, 48, 0.8"));
        assert_eq!(rows[0].types, "Salt-bridge");
        assert_eq!(rows[0].source, "A-LYS5");
        assert_eq!(rows[0].target, "B-GLU77");
        assert_eq!(rows[0].categories, "salt-bridge");
    }

    #[test]
    fn rows_list_every_matching_category() {
        let mut state = state_with(vec![record(&["Polar vdW", "Apolar vdW", "Water"], 0.7)]);
        state.selection.threshold = 0.0;
        let rows = interaction_rows(&state);

        assert_eq!(rows[0].class, "vdw");
        assert_eq!(rows[0].categories, "polar-vdw;apolar-vdw;water");
    }

    #[test]
    fn csv_output_has_header_and_one_line_per_row() {
        let state = state_with(vec![record(&["H-bond"], 1.0)]);
        let rows = interaction_rows(&state);
        let mut buffer = Vec::new();
        write_interactions(&rows, OutputFormat::Csv, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "source,target,consistency,frames,class,color,types,categories"
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("A-LYS5,B-GLU77,"));
        assert!(lines[1].contains(",9,h-bond,\"rgba(29, 29, 31, "));
    }

    #[test]
    fn json_output_is_an_array_of_rows() {
        let state = state_with(vec![record(&["Clash"], 0.7)]);
        let rows = interaction_rows(&state);
        let mut buffer = Vec::new();
        write_interactions(&rows, OutputFormat::Json, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["class"], "clash");
        assert_eq!(value[0]["frames"], 9);
    }

    #[test]
    fn table_output_ends_with_count() {
        let state = state_with(vec![record(&["H-bond"], 0.95), record(&["Clash"], 0.99)]);
        let mut buffer = Vec::new();
        write_interactions(&interaction_rows(&state), OutputFormat::Table, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("SOURCE"));
        assert!(text.trim_end().ends_with("2 interaction(s)"));
    }

    #[test]
    fn summary_reports_each_slot_independently() {
        let mut state = state_with(vec![record(&["H-bond"], 0.95)]);
        state.area.begin();
        state.area.settle(Err("No frames found for this system".to_string()));
        let mut trends = TrendSeries::new();
        trends.insert("H-bonds".to_string(), vec![2, 3]);
        state.trends.begin();
        state.trends.settle(Ok(trends));

        let summary = Summary(&state).to_string();
        assert!(summary.contains("interactions  loaded, 1 records, 1 pass the current filter"));
        assert!(summary.contains("area          failed: No frames found for this system"));
        assert!(summary.contains("trends        loaded, 1 categories"));
        assert!(summary.contains("H-bonds"));
        assert!(summary.contains("       5"));
    }

    #[test]
    fn summary_mean_bsa_averages_frames() {
        let mut state = StoreState::default();
        state.area.begin();
        state.area.settle(Ok(vec![
            AreaFrame { frame: 1, total_bsa: 100.0, polar_bsa: 0.0, non_polar_bsa: 0.0 },
            AreaFrame { frame: 2, total_bsa: 200.0, polar_bsa: 0.0, non_polar_bsa: 0.0 },
        ]));
        let summary = Summary(&state).to_string();
        assert!(summary.contains("2 frames, mean total BSA 150.0"));
        assert!(summary.contains("interactions  not requested"));
    }

    #[test]
    fn categories_listing_names_every_rule_and_class() {
        let text = CategoryListing(scheme_or_default("classic")).to_string();
        for rule in FILTER_CATEGORIES {
            assert!(text.contains(rule.id));
        }
        assert!(text.contains("cation-anion-pi"));
        assert!(text.contains("#1d1d1f"));
        assert!(text.contains("vdw, apolar, polar"));
    }
}
