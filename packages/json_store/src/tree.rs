//! Navigating and modifying JSON object trees by [`KeyPath`].

use serde_json::{Map, Value};

use crate::{KeyPath, StoreError};

/// Get the object directly containing the leaf of `path`.
///
/// Every parent segment must name a nested object.
pub fn resolve_container<'a>(
    root: &'a Map<String, Value>,
    path: &KeyPath,
) -> Result<&'a Map<String, Value>, StoreError> {
    let mut cursor = root;
    for segment in path.parents() {
        match cursor.get(segment) {
            Some(Value::Object(map)) => cursor = map,
            Some(_) => {
                return Err(StoreError::NotAnObject {
                    segment: segment.clone(),
                })
            }
            None => return Err(missing(path, segment)),
        }
    }
    Ok(cursor)
}

/// Get the object directly containing the leaf of `path`, creating missing parents as empty
/// objects on the way.
pub fn ensure_container<'a>(
    root: &'a mut Map<String, Value>,
    path: &KeyPath,
) -> Result<&'a mut Map<String, Value>, StoreError> {
    let mut cursor = root;
    for segment in path.parents() {
        let next = cursor
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        cursor = match next {
            Value::Object(map) => map,
            _ => {
                return Err(StoreError::NotAnObject {
                    segment: segment.clone(),
                })
            }
        };
    }
    Ok(cursor)
}

/// Get the value at `path`.
pub fn get_leaf<'a>(root: &'a Map<String, Value>, path: &KeyPath) -> Result<&'a Value, StoreError> {
    resolve_container(root, path)?
        .get(path.leaf())
        .ok_or_else(|| missing(path, path.leaf()))
}

/// Set the value at `path`, returning the value it replaces.
pub fn set_leaf(
    root: &mut Map<String, Value>,
    path: &KeyPath,
    value: Value,
) -> Result<Option<Value>, StoreError> {
    let container = ensure_container(root, path)?;
    Ok(container.insert(path.leaf().to_string(), value))
}

fn missing(path: &KeyPath, segment: &str) -> StoreError {
    StoreError::MissingKey {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}
