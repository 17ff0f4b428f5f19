use std::collections::HashMap;

use crate::model::Formation;

/// A marker position on the field in percentages: (left, top), both 0..=100.
/// Top 0 is the opponent's goal line, 100 our own.
pub type FieldPos = (f32, f32);

#[derive(Debug, Clone)]
pub struct TacticalBoard {
    pub formation: Formation,
    custom: HashMap<Formation, Vec<FieldPos>>,
}

impl Default for TacticalBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TacticalBoard {
    pub fn new() -> Self {
        Self {
            formation: Formation::F442,
            custom: HashMap::new(),
        }
    }

    /// The layout to draw: the saved custom layout for the current formation
    /// when one exists, otherwise the built-in default.
    pub fn positions(&self) -> Vec<FieldPos> {
        match self.custom.get(&self.formation) {
            Some(saved) if !saved.is_empty() => saved.clone(),
            _ => default_layout(self.formation),
        }
    }

    pub fn set_formation(&mut self, formation: Formation) {
        self.formation = formation;
    }

    pub fn cycle_formation(&mut self) {
        let all = Formation::ALL;
        let idx = all.iter().position(|f| *f == self.formation).unwrap_or(0);
        self.formation = all[(idx + 1) % all.len()];
    }

    /// Moves one marker by a percentage delta, clamping both axes to [0,100],
    /// and saves the whole layout under the current formation.
    pub fn nudge(&mut self, idx: usize, dx: f32, dy: f32) {
        let mut layout = self.positions();
        let Some(pos) = layout.get_mut(idx) else {
            return;
        };
        pos.0 = (pos.0 + dx).clamp(0.0, 100.0);
        pos.1 = (pos.1 + dy).clamp(0.0, 100.0);
        self.custom.insert(self.formation, layout);
    }

    /// Replaces the saved layout for the current formation wholesale,
    /// clamping every coordinate.
    pub fn set_positions(&mut self, layout: Vec<FieldPos>) {
        let clamped = layout
            .into_iter()
            .map(|(x, y)| (x.clamp(0.0, 100.0), y.clamp(0.0, 100.0)))
            .collect();
        self.custom.insert(self.formation, clamped);
    }

    pub fn reset_current(&mut self) {
        self.custom.remove(&self.formation);
    }

    pub fn has_custom(&self) -> bool {
        self.custom
            .get(&self.formation)
            .is_some_and(|l| !l.is_empty())
    }
}

/// Fixed default layout per formation, keeper last line. Lengths match
/// `Formation::slots`.
pub fn default_layout(formation: Formation) -> Vec<FieldPos> {
    let mut pos: Vec<FieldPos> = Vec::with_capacity(formation.slots());
    // Keeper first in every shape.
    pos.push((50.0, 88.0));
    match formation {
        Formation::F442 => {
            pos.extend([(15.0, 70.0), (38.0, 75.0), (62.0, 75.0), (85.0, 70.0)]);
            pos.extend([(15.0, 45.0), (38.0, 50.0), (62.0, 50.0), (85.0, 45.0)]);
            pos.extend([(35.0, 20.0), (65.0, 20.0)]);
        }
        Formation::F433 => {
            pos.extend([(15.0, 70.0), (38.0, 75.0), (62.0, 75.0), (85.0, 70.0)]);
            pos.extend([(30.0, 48.0), (50.0, 55.0), (70.0, 48.0)]);
            pos.extend([(20.0, 20.0), (50.0, 15.0), (80.0, 20.0)]);
        }
        Formation::F352 => {
            pos.extend([(28.0, 74.0), (50.0, 78.0), (72.0, 74.0)]);
            pos.extend([
                (12.0, 45.0),
                (32.0, 52.0),
                (50.0, 45.0),
                (68.0, 52.0),
                (88.0, 45.0),
            ]);
            pos.extend([(35.0, 18.0), (65.0, 18.0)]);
        }
        Formation::F221 => {
            pos.extend([(30.0, 70.0), (70.0, 70.0)]);
            pos.extend([(30.0, 42.0), (70.0, 42.0)]);
            pos.push((50.0, 18.0));
        }
        Formation::F321 => {
            pos.extend([(22.0, 72.0), (50.0, 76.0), (78.0, 72.0)]);
            pos.extend([(35.0, 42.0), (65.0, 42.0)]);
            pos.push((50.0, 18.0));
        }
    }
    pos
}
