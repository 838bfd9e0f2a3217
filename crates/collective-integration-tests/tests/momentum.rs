//! Progress math over the dashboard's initiative cards.

use collective_momentum::{average_momentum, validate_goal, Error, MomentumScore, Progress};

struct Card {
    current: u64,
    goal: u64,
    momentum: u8,
}

fn cards() -> Vec<Card> {
    vec![
        Card { current: 1247, goal: 2000, momentum: 87 },
        Card { current: 892, goal: 1500, momentum: 76 },
        Card { current: 2156, goal: 3000, momentum: 92 },
        Card { current: 1080, goal: 1000, momentum: 68 },
    ]
}

#[test]
fn bars_never_overflow() {
    for card in cards() {
        let progress = Progress::new(card.current, card.goal).unwrap();
        assert!(progress.bar_width() <= 100.0);
    }
}

#[test]
fn overshooting_card_is_complete() {
    let last = cards().pop().unwrap();
    let progress = Progress::new(last.current, last.goal).unwrap();
    assert!(progress.is_complete());
    assert!(progress.percentage() > 100.0);
    assert_eq!(progress.bar_width(), 100.0);
}

#[test]
fn average_dashboard_momentum() {
    let scores: Vec<MomentumScore> = cards()
        .iter()
        .map(|c| MomentumScore::new(c.momentum).unwrap())
        .collect();
    assert_eq!(average_momentum(&scores).map(MomentumScore::value), Some(81));
}

#[test]
fn dashboard_goals_are_selectable() {
    for card in cards() {
        assert_eq!(validate_goal(card.goal), Ok(card.goal));
    }
    assert!(matches!(validate_goal(5), Err(Error::GoalOutOfRange { .. })));
}
