//! Field-by-field reading of a candidate JSON object.
//!
//! A `FieldReader` pulls typed values out of a JSON object while recording
//! every violation it meets. Reads never stop early: a bad field yields a
//! placeholder value and the reader moves on, so one pass reports every
//! problem in the record. Callers discard the placeholders whenever any
//! violation was recorded.

use serde_json::{Map, Number, Value};

use super::error::Violation;

pub struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    prefix: String,
    consumed: Vec<&'static str>,
    violations: &'a mut Vec<Violation>,
}

impl<'a> FieldReader<'a> {
    pub fn new(obj: &'a Map<String, Value>, violations: &'a mut Vec<Violation>) -> Self {
        Self {
            obj,
            prefix: String::new(),
            consumed: Vec::new(),
            violations,
        }
    }

    fn path(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.prefix, field)
        }
    }

    fn take(&mut self, field: &'static str) -> Option<&'a Value> {
        self.consumed.push(field);
        self.obj.get(field)
    }

    pub fn required_string(&mut self, field: &'static str) -> String {
        match self.take(field) {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => {
                let found = self.obj.get(field);
                self.violations
                    .push(Violation::missing(self.path(field), "string", found));
                String::new()
            }
            Some(other) => {
                self.violations
                    .push(Violation::type_mismatch(self.path(field), "string", other));
                String::new()
            }
        }
    }

    pub fn optional_string(&mut self, field: &'static str) -> Option<String> {
        match self.take(field)? {
            Value::String(s) => Some(s.clone()),
            other => {
                self.violations
                    .push(Violation::type_mismatch(self.path(field), "string", other));
                None
            }
        }
    }

    pub fn optional_bool(&mut self, field: &'static str) -> Option<bool> {
        match self.take(field)? {
            Value::Bool(b) => Some(*b),
            other => {
                self.violations
                    .push(Violation::type_mismatch(self.path(field), "boolean", other));
                None
            }
        }
    }

    /// Numbers are kept as parsed so `1` stays `1` and not `1.0`.
    pub fn optional_number(&mut self, field: &'static str) -> Option<Number> {
        match self.take(field)? {
            Value::Number(n) => Some(n.clone()),
            other => {
                self.violations
                    .push(Violation::type_mismatch(self.path(field), "number", other));
                None
            }
        }
    }

    /// Read an optional list of strings (id references, tags, free-text notes).
    pub fn optional_strings(&mut self, field: &'static str) -> Option<Vec<String>> {
        let items = match self.take(field)? {
            Value::Array(items) => items,
            other => {
                self.violations.push(Violation::type_mismatch(
                    self.path(field),
                    "array of string",
                    other,
                ));
                return None;
            }
        };

        let base = self.path(field);
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                other => self.violations.push(Violation::element_shape(
                    format!("{}[{}]", base, i),
                    "string",
                    other,
                )),
            }
        }
        Some(out)
    }

    /// Read an optional list of nested objects, each read by `read`.
    pub fn optional_objects<T>(
        &mut self,
        field: &'static str,
        element_name: &str,
        read: impl Fn(&mut FieldReader<'_>) -> T,
    ) -> Option<Vec<T>> {
        let items = match self.take(field)? {
            Value::Array(items) => items,
            other => {
                self.violations.push(Violation::type_mismatch(
                    self.path(field),
                    &format!("array of {}", element_name),
                    other,
                ));
                return None;
            }
        };

        let base = self.path(field);
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let elem_path = format!("{}[{}]", base, i);
            match item {
                Value::Object(obj) => {
                    let mut nested = FieldReader {
                        obj,
                        prefix: elem_path,
                        consumed: Vec::new(),
                        violations: &mut *self.violations,
                    };
                    out.push(read(&mut nested));
                }
                other => self
                    .violations
                    .push(Violation::element_shape(elem_path, "object", other)),
            }
        }
        Some(out)
    }

    /// Keys present in the object that no read asked for.
    pub fn unknown_fields(&self) -> Vec<String> {
        self.obj
            .keys()
            .filter(|k| !self.consumed.iter().any(|c| c == k))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error::ViolationKind;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(obj) => obj,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_required_string_null_counts_as_missing() {
        let obj = object(json!({"content": null}));
        let mut violations = Vec::new();
        let mut reader = FieldReader::new(&obj, &mut violations);
        assert_eq!(reader.required_string("content"), "");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::MissingRequiredField);
        assert_eq!(violations[0].found, "null");
    }

    #[test]
    fn test_optional_fields_absent() {
        let obj = object(json!({}));
        let mut violations = Vec::new();
        let mut reader = FieldReader::new(&obj, &mut violations);
        assert_eq!(reader.optional_string("owner"), None);
        assert_eq!(reader.optional_bool("isPicturable"), None);
        assert_eq!(reader.optional_number("priority"), None);
        assert_eq!(reader.optional_strings("notes"), None);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_optional_strings_keeps_good_elements() {
        let obj = object(json!({"links": ["1", 2, "3", null]}));
        let mut violations = Vec::new();
        let mut reader = FieldReader::new(&obj, &mut violations);
        let links = reader.optional_strings("links");
        assert_eq!(links, Some(vec!["1".to_string(), "3".to_string()]));

        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["links[1]", "links[3]"]);
        assert!(violations
            .iter()
            .all(|v| v.kind == ViolationKind::ElementShapeViolation));
    }

    #[test]
    fn test_nested_paths() {
        let obj = object(json!({"sounds": [{"filename": "a.mp3"}, {"file": "b.mp3"}, "c.mp3"]}));
        let mut violations = Vec::new();
        let mut reader = FieldReader::new(&obj, &mut violations);
        let sounds = reader.optional_objects("sounds", "sound", |r| r.required_string("filename"));
        assert_eq!(sounds.map(|s| s.len()), Some(2));

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].path, "sounds[1].filename");
        assert_eq!(violations[0].kind, ViolationKind::MissingRequiredField);
        assert_eq!(violations[1].path, "sounds[2]");
        assert_eq!(violations[1].kind, ViolationKind::ElementShapeViolation);
        assert_eq!(violations[1].expected, "object");
    }

    #[test]
    fn test_optional_number_keeps_integer_form() {
        let obj = object(json!({"priority": 3, "weight": 0.5, "big": u64::MAX}));
        let mut violations = Vec::new();
        let mut reader = FieldReader::new(&obj, &mut violations);
        assert_eq!(reader.optional_number("priority"), Some(Number::from(3)));
        assert_eq!(reader.optional_number("big").and_then(|n| n.as_u64()), Some(u64::MAX));
        let weight = reader.optional_number("weight");
        assert_eq!(weight.as_ref().and_then(|n| n.as_f64()), Some(0.5));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_unknown_fields() {
        let obj = object(json!({"content": "x", "legacyScore": 3}));
        let mut violations = Vec::new();
        let mut reader = FieldReader::new(&obj, &mut violations);
        reader.required_string("content");
        assert_eq!(reader.unknown_fields(), vec!["legacyScore".to_string()]);
    }
}
