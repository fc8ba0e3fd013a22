//! Python bindings, built with the `python` feature.

use std::path::Path;

use pyo3::prelude::*;

use crate::indexer::overlap::Span;
use crate::store::snapshot::Snapshot;

/// Normalize a raw phone number to E.164, or `None`.
#[pyfunction]
#[pyo3(name = "normalize_phone_number", signature = (raw=None))]
fn py_normalize_phone_number(raw: Option<&str>) -> Option<String> {
    crate::store::phone::normalize_phone_number(raw)
}

/// Overlap test on day ordinals; `None` ends mean ongoing.
#[pyfunction]
#[pyo3(name = "overlaps_at_least", signature = (a_start, a_end, b_start, b_end, min_days=crate::models::DEFAULT_MIN_OVERLAP_DAYS))]
fn py_overlaps_at_least(
    a_start: i64,
    a_end: Option<i64>,
    b_start: i64,
    b_end: Option<i64>,
    min_days: i64,
) -> bool {
    crate::indexer::overlap::overlaps_at_least(
        Span::new(a_start, a_end),
        Span::new(b_start, b_end),
        min_days,
    )
}

/// Load both files and return the sorted connection ids of `person_id`.
#[pyfunction]
#[pyo3(signature = (people_path, contacts_path, person_id, min_days=crate::models::DEFAULT_MIN_OVERLAP_DAYS))]
fn find_all_connections_from_files(
    people_path: &str,
    contacts_path: Option<&str>,
    person_id: i64,
    min_days: i64,
) -> PyResult<Vec<i64>> {
    let snapshot = Snapshot::load(Path::new(people_path), contacts_path.map(Path::new))?;
    let report = snapshot.connection_report(person_id, min_days)?;
    Ok(report.all.into_iter().collect())
}

#[pymodule]
fn _connections_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add(
        "DEFAULT_MIN_OVERLAP_DAYS",
        crate::models::DEFAULT_MIN_OVERLAP_DAYS,
    )?;
    m.add_function(wrap_pyfunction!(py_normalize_phone_number, m)?)?;
    m.add_function(wrap_pyfunction!(py_overlaps_at_least, m)?)?;
    m.add_function(wrap_pyfunction!(find_all_connections_from_files, m)?)?;
    Ok(())
}
