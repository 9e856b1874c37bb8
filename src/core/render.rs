use crate::domain::model::AppIdea;
use crate::utils::error::{IdeaError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Table,
}

pub fn render(ideas: &[AppIdea], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(ideas),
        OutputFormat::Csv => render_csv(ideas),
        OutputFormat::Table => Ok(render_table(ideas)),
    }
}

pub fn render_json(ideas: &[AppIdea]) -> Result<String> {
    Ok(serde_json::to_string_pretty(ideas)?)
}

pub fn render_csv(ideas: &[AppIdea]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // serde 的欄位名稱即為表頭
    for idea in ideas {
        writer.serialize(idea)?;
    }
    if ideas.is_empty() {
        writer.write_record([
            "name",
            "estimatedPrice",
            "description",
            "category",
            "reasonForSuccess",
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| IdeaError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| IdeaError::IoError(std::io::Error::other(e)))
}

pub fn render_table(ideas: &[AppIdea]) -> String {
    let mut out = String::new();
    for (i, idea) in ideas.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} [{}] {}\n",
            i + 1,
            idea.name,
            idea.category,
            idea.estimated_price
        ));
        out.push_str(&format!("   {}\n", idea.description));
        out.push_str(&format!("   Why it works: {}\n", idea.reason_for_success));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<AppIdea> {
        vec![
            AppIdea::new("Gorgias, Help Desk", "$60/mo", "Helpdesk", "Support", "Deep \"Shopify\" data"),
            AppIdea::new("Yotpo", "Custom", "Reviews", "Marketing", "Social proof"),
        ]
    }

    #[test]
    fn test_render_csv_header_and_quoting() {
        let csv = render_csv(&sample()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "name,estimatedPrice,description,category,reasonForSuccess"
        );
        assert_eq!(
            lines.next().unwrap(),
            r#""Gorgias, Help Desk",$60/mo,Helpdesk,Support,"Deep ""Shopify"" data""#
        );
        assert_eq!(lines.next().unwrap(), "Yotpo,Custom,Reviews,Marketing,Social proof");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_render_csv_empty_list_keeps_header() {
        let csv = render_csv(&[]).unwrap();
        assert_eq!(
            csv.trim_end(),
            "name,estimatedPrice,description,category,reasonForSuccess"
        );
    }

    #[test]
    fn test_render_json_is_camel_case() {
        let json = render_json(&sample()).unwrap();
        let parsed: Vec<AppIdea> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
        assert!(json.contains("\"reasonForSuccess\""));
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&sample());
        assert!(table.starts_with("1. Gorgias, Help Desk [Support] $60/mo\n"));
        assert!(table.contains("2. Yotpo [Marketing] Custom"));
        assert!(table.contains("   Why it works: Social proof"));
    }
}
