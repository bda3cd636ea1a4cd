use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

/// One staff row as served by the endpoint: field name → scalar value.
/// Fields that are absent and fields that are explicitly `null` read the
/// same way downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Field lookup; missing keys read as JSON null.
    pub fn field(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&Value::Null)
    }
}

/// Fetch the full staff list from the records endpoint. Any non-2xx status
/// is an error; the body must be a JSON array of objects. No retries.
pub async fn fetch_staff(client: &Client, url: &str) -> Result<Vec<Record>> {
    let url = Url::parse(url).with_context(|| format!("invalid records URL `{}`", url))?;
    let records = client
        .get(url.clone())
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("fetching staff records from {}", url))?
        .json::<Vec<Record>>()
        .await
        .context("decoding staff records as a JSON array")?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_endpoint_payload() {
        let body = r#"[
            {"user_id": "u-1", "name": "山田 花子", "d_id": "D001",
             "employee_number": "1001", "position_id": 3,
             "position_name": "看護師", "department_id": 12,
             "department_name": "外来", "birthday": null},
            {"user_id": "u-2", "name": null}
        ]"#;

        let records: Vec<Record> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("name"), &json!("山田 花子"));
        assert_eq!(records[0].field("position_id"), &json!(3));
        assert!(records[1].field("name").is_null());
    }

    #[test]
    fn missing_field_reads_as_null() {
        let records: Vec<Record> = serde_json::from_str(r#"[{"user_id": "u-1"}]"#).unwrap();
        assert!(records[0].field("department_name").is_null());
    }
}
