use eframe::egui::Pos2;

use crate::util::distance_sq;

/// For every position, the indices of its `k` nearest other positions by
/// squared distance. Lists are not symmetric.
///
/// The first `k` candidates fill the slots. After that, each candidate is
/// compared with the farthest slot (the earliest one if several tie) and
/// replaces it only when strictly closer, so the slots always hold a valid
/// k-nearest set. Equal distances keep the candidate that was seen first.
pub fn nearest_neighbors(positions: &[Pos2], k: usize) -> Vec<Vec<usize>> {
    positions
        .iter()
        .enumerate()
        .map(|(index, &origin)| closest_to(positions, index, origin, k))
        .collect()
}

fn closest_to(positions: &[Pos2], index: usize, origin: Pos2, k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }

    let mut slots: Vec<(usize, f32)> = Vec::with_capacity(k);
    for (candidate, &position) in positions.iter().enumerate() {
        if candidate == index {
            continue;
        }

        let distance = distance_sq(origin, position);
        if slots.len() < k {
            slots.push((candidate, distance));
            continue;
        }

        let mut farthest = 0;
        for slot in 1..slots.len() {
            if slots[slot].1 > slots[farthest].1 {
                farthest = slot;
            }
        }

        if distance < slots[farthest].1 {
            slots[farthest] = (candidate, distance);
        }
    }

    slots.into_iter().map(|(candidate, _)| candidate).collect()
}
