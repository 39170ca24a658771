// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Grade ladder and score result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade on fixed total-CO2 breakpoints.
///
/// The breakpoints, colors, and labels are the externally visible contract
/// of the tool; saved records depend on them staying fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Grade {
    /// Grade for a total footprint in kg CO2e.
    pub fn from_co2_kg(total_co2_kg: f64) -> Self {
        match total_co2_kg {
            kg if kg <= 50.0 => Grade::A,
            kg if kg <= 250.0 => Grade::B,
            kg if kg <= 1000.0 => Grade::C,
            kg if kg <= 5000.0 => Grade::D,
            kg if kg <= 20000.0 => Grade::E,
            kg if kg <= 100000.0 => Grade::F,
            _ => Grade::G,
        }
    }

    /// Fixed display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Grade::A => "#2ecc71",
            Grade::B => "#27ae60",
            Grade::C => "#f1c40f",
            Grade::D => "#e67e22",
            Grade::E => "#d35400",
            Grade::F => "#e74c3c",
            Grade::G => "#c0392b",
        }
    }

    /// Fixed human label
    pub fn label(&self) -> &'static str {
        match self {
            Grade::A => "Excellent",
            Grade::B => "Very Good",
            Grade::C => "Good",
            Grade::D => "Medium",
            Grade::E => "Poor",
            Grade::F => "Very Poor",
            Grade::G => "Critical",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::G => "G",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "E" => Some(Grade::E),
            "F" => Some(Grade::F),
            "G" => Some(Grade::G),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized score with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted CO2/water score, 0 (worst) to 100 (best)
    pub score_100: u8,
    pub grade: Grade,
    pub color: String,
    pub label: String,
}

impl ScoreResult {
    pub fn new(score_100: u8, grade: Grade) -> Self {
        Self {
            score_100,
            grade,
            color: grade.color().to_string(),
            label: grade.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries_are_exact() {
        assert_eq!(Grade::from_co2_kg(50.0), Grade::A);
        assert_eq!(Grade::from_co2_kg(50.000001), Grade::B);
        assert_eq!(Grade::from_co2_kg(250.0), Grade::B);
        assert_eq!(Grade::from_co2_kg(1000.0), Grade::C);
        assert_eq!(Grade::from_co2_kg(1000.000001), Grade::D);
        assert_eq!(Grade::from_co2_kg(5000.0), Grade::D);
        assert_eq!(Grade::from_co2_kg(20000.0), Grade::E);
        assert_eq!(Grade::from_co2_kg(100000.0), Grade::F);
        assert_eq!(Grade::from_co2_kg(100000.1), Grade::G);
    }

    #[test]
    fn test_zero_footprint_is_grade_a() {
        assert_eq!(Grade::from_co2_kg(0.0), Grade::A);
    }

    #[test]
    fn test_grade_display_metadata() {
        let score = ScoreResult::new(72, Grade::C);
        assert_eq!(score.grade.to_string(), "C");
        assert_eq!(score.label, "Good");
        assert_eq!(score.color, "#f1c40f");
    }

    #[test]
    fn test_grade_token_round_trip() {
        for grade in [
            Grade::A,
            Grade::B,
            Grade::C,
            Grade::D,
            Grade::E,
            Grade::F,
            Grade::G,
        ] {
            assert_eq!(Grade::from_token(grade.as_str()), Some(grade));
        }
        assert_eq!(Grade::from_token("H"), None);
    }
}
