// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Reduction advice derived from a computed footprint.
//!
//! Rules are deliberately coarse. They point at the handful of levers that
//! dominate real projects (grid choice, hardware sizing, serving cost,
//! retraining cadence) and stay silent otherwise. An empty list means no
//! rule fired, not that the project is optimal.

use ecometrics_model::{FootprintResult, InferenceMode, ProjectDescription, RunFrequency};
use ecometrics_refdata::ReferenceTables;

/// Serving grids dirtier than this trigger the region recommendation.
const HIGH_INTENSITY_GCO2_PER_KWH: f64 = 200.0;

/// Produce ordered, human-readable recommendations.
pub fn recommend(
    project: &ProjectDescription,
    footprint: &FootprintResult,
    tables: &ReferenceTables,
) -> Vec<String> {
    let mut recs = Vec::new();

    let inf = &project.inference;
    if inf.include && inf.mode == InferenceMode::SelfHosted {
        let region = tables.region(&inf.region_id);
        if region.gco2_per_kwh > HIGH_INTENSITY_GCO2_PER_KWH {
            recs.push(format!(
                "Carbon intensity in {} is high ({} gCO2/kWh). Consider serving from a \
                 low-carbon region such as Sweden or France.",
                region.name, region.gco2_per_kwh
            ));
        }
    }

    if footprint.co2_inference_embodied_kg > 2.0 * footprint.co2_inference_usage_kg
        && footprint.co2_inference_embodied_kg > 0.0
    {
        recs.push(
            "Embodied emissions dwarf usage emissions for inference. The serving hardware \
             looks oversized for its traffic; consider fewer or smaller devices."
                .to_string(),
        );
    }

    if footprint.co2_training_usage_kg > 0.0
        && footprint.co2_inference_usage_kg > 10.0 * footprint.co2_training_usage_kg
    {
        recs.push(
            "Inference dominates the footprint. Consider optimizing the model \
             (quantization, distillation) or caching frequent answers."
                .to_string(),
        );
    }

    if project.training.include
        && project.training.frequency == RunFrequency::Daily
        && footprint.co2_training_usage_kg > 0.25 * footprint.total_co2_kg
    {
        recs.push(
            "Daily retraining accounts for over a quarter of the total footprint. \
             Consider a weekly or monthly cadence."
                .to_string(),
        );
    }

    recs
}
