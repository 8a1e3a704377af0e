//! Strength summary box.

use crate::pass::Generated;
use crate::rand::SourceKind;
use crate::strength::{Strength, StrengthEstimator, entropy_bits};
use crate::terminal::{box_bottom, box_line, box_top, format_number, meter, paint};

/// Weakest strength in the batch, or neutral for an empty batch.
pub fn weakest(batch: &[Generated], estimator: &StrengthEstimator) -> Strength {
    weakest_entry(batch, estimator).map_or_else(Strength::neutral, |(_, strength)| strength)
}

fn weakest_entry<'a>(
    batch: &'a [Generated],
    estimator: &StrengthEstimator,
) -> Option<(&'a Generated, Strength)> {
    batch
        .iter()
        .map(|generated| (generated, generated.strength(estimator)))
        .min_by(|(_, a), (_, b)| a.score.total_cmp(&b.score))
}

/// First non-cryptographic source in the batch. The engine can switch
/// sources partway through, so later entries matter as much as the first.
pub fn downgraded(batch: &[Generated]) -> Option<SourceKind> {
    batch
        .iter()
        .map(|generated| generated.source)
        .find(|source| !source.is_cryptographic())
}

pub fn draw(batch: &[Generated], estimator: &StrengthEstimator, show_pool: bool) {
    let Some((weakest, strength)) = weakest_entry(batch, estimator) else {
        return;
    };
    let level = strength.level;
    let source = downgraded(batch).unwrap_or(weakest.source);

    let title = if batch.len() > 1 {
        format!("Strength (weakest of {})", format_number(batch.len()))
    } else {
        "Strength".to_string()
    };

    box_top(&title);
    box_line(&format!(
        "{}  {}  {:.1}",
        paint(&meter(level.width), level.color),
        paint(level.label, level.color),
        strength.score
    ));
    box_line(level.description);
    box_line(&format!(
        "Pool: {} chars • {:.1} bits • Source: {}",
        weakest.pool.len(),
        entropy_bits(weakest.password.len(), weakest.pool.len()),
        source.describe()
    ));
    if show_pool {
        box_line(&format!("Chars: {}", weakest.pool));
    }
    box_bottom();
}
