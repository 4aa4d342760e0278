use proptest::prelude::*;
use rink_model::{EventDetail, EventType, ShotOutcome};
use rink_transform::{EventCells, classify};

fn number_list(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

proptest! {
    #[test]
    fn penalty_shot_label_never_yields_a_goal(
        plus in prop::collection::vec(1u32..99, 0..6),
        minus in prop::collection::vec(1u32..99, 0..6),
        prefix in "(Goal|GWG|PPG)",
    ) {
        let label = format!("{prefix} (PS)");
        let details_1 = format!("Pos:{}", number_list(&plus));
        let details_2 = format!("Neg:{}", number_list(&minus));
        let result = classify(&EventCells {
            label: &label,
            details_1: &details_1,
            details_2: &details_2,
            player: None,
        });
        prop_assert_eq!(result.detail.event_type(), Some(EventType::PenaltyShot));
        prop_assert_eq!(
            result.detail,
            EventDetail::PenaltyShot {
                outcome: ShotOutcome::Scored,
                goalie_number: minus.first().copied(),
            }
        );
    }

    #[test]
    fn goal_lists_keep_order(
        plus in prop::collection::vec(1u32..99, 1..6),
        minus in prop::collection::vec(1u32..99, 0..6),
    ) {
        let details_1 = format!("Pos:{}", number_list(&plus));
        let details_2 = format!("Neg:{}", number_list(&minus));
        let result = classify(&EventCells {
            label: "Goal",
            details_1: &details_1,
            details_2: &details_2,
            player: None,
        });
        prop_assert_eq!(result.detail.on_ice_count(), plus.len() + minus.len());
        prop_assert_eq!(
            result.detail,
            EventDetail::Goal { on_ice_plus: plus, on_ice_minus: minus }
        );
    }
}
