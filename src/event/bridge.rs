//! Bridge from the `log` crate's records.
//!
//! Producers already using the `log` facade can hand their records straight
//! to a sink. The record's own source file and line seed the `File` and
//! `LineNumber` properties; explicit key-values win over both. The message is
//! captured after `log`'s own formatting, so it carries no template holes of
//! its own.

use crate::event::log_event::LogEvent;
use crate::event::severity::Severity;
use crate::properties::BuildProperties;
use log::kv;
use serde_json::Value;
use std::collections::BTreeMap;

impl From<&log::Record<'_>> for LogEvent {
    fn from(record: &log::Record<'_>) -> Self {
        let mut properties = BTreeMap::new();
        if let Some(file) = record.file() {
            properties.insert(BuildProperties::FILE.to_string(), Value::from(file));
        }
        if let Some(line) = record.line() {
            properties.insert(BuildProperties::LINE_NUMBER.to_string(), Value::from(line));
        }

        let mut visitor = PropertyVisitor(&mut properties);
        let _ = record.key_values().visit(&mut visitor);

        Self {
            level: Severity::from(record.level()),
            template: record.args().to_string(),
            properties,
            error: None,
        }
    }
}

struct PropertyVisitor<'a>(&'a mut BTreeMap<String, Value>);

impl<'kvs> kv::VisitSource<'kvs> for PropertyVisitor<'_> {
    fn visit_pair(
        &mut self,
        key: kv::Key<'kvs>,
        value: kv::Value<'kvs>,
    ) -> Result<(), kv::Error> {
        self.0.insert(key.as_str().to_string(), json_value(&value));
        Ok(())
    }
}

fn json_value(value: &kv::Value<'_>) -> Value {
    if let Some(s) = value.to_borrowed_str() {
        Value::from(s)
    } else if let Some(b) = value.to_bool() {
        Value::from(b)
    } else if let Some(n) = value.to_u64() {
        Value::from(n)
    } else if let Some(n) = value.to_i64() {
        Value::from(n)
    } else if let Some(n) = value.to_f64() {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    } else {
        Value::from(value.to_string())
    }
}
