mod common;
use common::setup_store;
use moveup::core::rewards::{REFUSED_MESSAGE, RedeemOutcome, RewardSession};
use moveup::errors::AppError;
use moveup::models::reward::{Reward, RewardState};
use moveup::store::records;
use proptest::prelude::*;
use std::fs;

fn small_catalog() -> Vec<Reward> {
    vec![Reward::new("A", 10), Reward::new("B", 20)]
}

fn persisted(store: &moveup::store::RecordStore) -> (i64, Vec<String>) {
    (
        store.load(records::SCORE, 0i64),
        store.load(records::REDEEMED_REWARDS, Vec::new()),
    )
}

#[test]
fn test_end_to_end_redemption_flow() {
    let store = setup_store("rewards_end_to_end");
    let mut session = RewardSession::with_catalog(&store, small_catalog());
    let a = session.catalog[0].clone();
    let b = session.catalog[1].clone();

    assert_eq!(session.score, 0);
    assert!(session.message.is_empty());

    // locked
    assert_eq!(session.redeem(&a), RedeemOutcome::Refused);
    assert_eq!(session.message, REFUSED_MESSAGE);
    assert_eq!(session.score, 0);
    assert!(session.redeemed.is_empty());

    session.set_score(15);
    assert_eq!(session.redeem(&a), RedeemOutcome::Redeemed);
    assert_eq!(session.score, 5);
    assert_eq!(session.redeemed, vec!["A"]);
    assert_eq!(session.message, "Recompensa resgatada: A!");
    assert_eq!(persisted(&store), (5, vec!["A".to_string()]));

    // already redeemed
    assert_eq!(session.redeem(&a), RedeemOutcome::Refused);
    assert_eq!(session.message, REFUSED_MESSAGE);

    // 5 < 20
    assert_eq!(session.redeem(&b), RedeemOutcome::Refused);
    assert_eq!(session.score, 5);
    assert_eq!(session.redeemed, vec!["A"]);
    assert_eq!(persisted(&store), (5, vec!["A".to_string()]));
}

#[test]
fn test_states_are_derived_from_score_and_list() {
    let store = setup_store("rewards_states");
    let mut session = RewardSession::with_catalog(&store, small_catalog());
    session.set_score(10);

    let a = session.catalog[0].clone();
    let b = session.catalog[1].clone();
    assert_eq!(session.state_of(&a), RewardState::Available);
    assert_eq!(session.state_of(&b), RewardState::Locked);

    session.redeem(&a);
    assert_eq!(session.state_of(&a), RewardState::Redeemed);

    // redeemed stays terminal whatever the score
    session.award(100).unwrap();
    assert_eq!(session.state_of(&a), RewardState::Redeemed);
    assert_eq!(session.state_of(&b), RewardState::Available);
}

#[test]
fn test_exact_points_are_enough() {
    let store = setup_store("rewards_exact_points");
    let mut session = RewardSession::with_catalog(&store, small_catalog());
    session.set_score(20);
    let b = session.catalog[1].clone();

    assert_eq!(session.redeem(&b), RedeemOutcome::Redeemed);
    assert_eq!(session.score, 0);
}

#[test]
fn test_session_reloads_persisted_state() {
    let store = setup_store("rewards_reload");
    {
        let mut session = RewardSession::load(&store);
        session.award(25).unwrap();
        let badge = session.find("Badge de Iniciante").cloned().unwrap();
        session.redeem(&badge);
    }

    let session = RewardSession::load(&store);
    assert_eq!(session.score, 15);
    assert_eq!(session.redeemed, vec!["Badge de Iniciante"]);
    assert_eq!(session.catalog.len(), 3);
}

#[test]
fn test_find_by_name_or_position() {
    let store = setup_store("rewards_find");
    let session = RewardSession::load(&store);

    assert_eq!(
        session.find("cupom de desconto de 20%").map(|r| r.points_required),
        Some(20)
    );
    assert_eq!(
        session.find("3").map(|r| r.name.as_str()),
        Some("Equipamento de Treino")
    );
    assert!(session.find("0").is_none());
    assert!(session.find("4").is_none());
    assert!(session.find("Bicicleta").is_none());
}

#[test]
fn test_second_write_failure_leaves_files_out_of_step() {
    let store = setup_store("rewards_partial_write");
    let mut session = RewardSession::with_catalog(&store, small_catalog());

    // score.json cannot be written
    fs::create_dir_all(store.path_for(records::SCORE)).unwrap();
    session.set_score(15);
    let a = session.catalog[0].clone();

    assert_eq!(session.redeem(&a), RedeemOutcome::Redeemed);
    assert_eq!(session.score, 5);
    assert_eq!(session.redeemed, vec!["A"]);

    assert_eq!(persisted(&store), (0, vec!["A".to_string()]));
}

#[test]
fn test_award_past_max_score_is_refused() {
    let store = setup_store("rewards_award_overflow");
    let mut session = RewardSession::with_catalog(&store, small_catalog());
    session.set_score(i64::MAX);

    let err = session.award(1).unwrap_err();
    assert!(matches!(err, AppError::ScoreOverflow(1)));
    assert_eq!(session.score, i64::MAX);
    assert_eq!(store.load(records::SCORE, 0i64), i64::MAX);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_locked_redeem_is_noop(score in 0i64..100, extra in 1i64..100) {
        let store = setup_store("rewards_prop_locked");
        let reward = Reward::new("Prêmio", score + extra);
        let mut session = RewardSession::with_catalog(&store, vec![reward.clone()]);
        session.set_score(score);

        prop_assert_eq!(session.redeem(&reward), RedeemOutcome::Refused);
        prop_assert_eq!(session.score, score);
        prop_assert!(session.redeemed.is_empty());
        prop_assert_eq!(persisted(&store), (score, Vec::new()));
    }

    #[test]
    fn prop_redeem_once_then_noop(cost in 0i64..100, surplus in 0i64..100, later in 0i64..200) {
        let store = setup_store("rewards_prop_once");
        let reward = Reward::new("Prêmio", cost);
        let mut session = RewardSession::with_catalog(&store, vec![reward.clone()]);
        session.set_score(cost + surplus);

        prop_assert_eq!(session.redeem(&reward), RedeemOutcome::Redeemed);
        prop_assert_eq!(session.score, surplus);
        prop_assert_eq!(&session.redeemed, &vec!["Prêmio".to_string()]);

        session.award(later).unwrap();
        let before = session.score;
        prop_assert_eq!(session.redeem(&reward), RedeemOutcome::Refused);
        prop_assert_eq!(session.score, before);
        prop_assert_eq!(session.redeemed.len(), 1);
        prop_assert_eq!(persisted(&store), (before, vec!["Prêmio".to_string()]));
    }
}
