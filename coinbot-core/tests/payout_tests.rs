// tests/payout_tests.rs
//
// PayoutCoordinator: audience dedup, one feed entry per payout, failure
// propagation with no feed side effects.

mod helpers;

use std::sync::Arc;

use mockall::predicate::eq;

use coinbot_common::models::chatter::ChatterSnapshot;
use coinbot_core::eventbus::EventBus;
use coinbot_core::services::{OverlayFeed, PayoutCoordinator};
use coinbot_core::Error;

use helpers::*;

async fn coordinator(
    chatters: MockChatters,
    economy: MockEconomy,
) -> (PayoutCoordinator, tokio::sync::mpsc::Receiver<coinbot_core::eventbus::BotEvent>) {
    let bus = Arc::new(EventBus::new());
    let feed_rx = bus.subscribe(Some(100)).await;
    let overlay = OverlayFeed::new(bus);
    (
        PayoutCoordinator::new(Arc::new(chatters), Arc::new(economy), overlay),
        feed_rx,
    )
}

#[tokio::test]
async fn payout_counts_unique_recipients() {
    let mut chatters = MockChatters::new();
    chatters.expect_fetch().times(1).returning(|| {
        Ok(ChatterSnapshot {
            viewers: names(&["a", "b"]),
            moderators: names(&["c"]),
            vips: vec![],
        })
    });

    let mut economy = MockEconomy::new();
    economy
        .expect_grant_to_list()
        .with(eq(names(&["a", "b", "c"])), eq(1))
        .times(1)
        .returning(|_, _| Ok(()));

    let (coordinator, mut feed) = coordinator(chatters, economy).await;
    let receipt = coordinator.run_payout(1, "someone").await.unwrap();

    assert_eq!(receipt.recipients, 3);
    let entries = drain_feed(&mut feed);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("3"));
    assert!(entries[0].contains("someone"));
}

#[tokio::test]
async fn duplicate_across_categories_gets_one_grant() {
    let mut chatters = MockChatters::new();
    chatters.expect_fetch().times(1).returning(|| {
        Ok(ChatterSnapshot {
            viewers: names(&["a", "b"]),
            moderators: names(&["a", "c"]),
            vips: vec![],
        })
    });

    let mut economy = MockEconomy::new();
    economy
        .expect_grant_to_list()
        .with(eq(names(&["a", "b", "c"])), eq(1))
        .times(1)
        .returning(|_, _| Ok(()));

    let (coordinator, _feed) = coordinator(chatters, economy).await;
    let receipt = coordinator.run_payout(1, "someone").await.unwrap();

    assert_eq!(receipt.recipients, 3);
}

#[tokio::test]
async fn vips_lead_the_audience_order() {
    let mut chatters = MockChatters::new();
    chatters.expect_fetch().times(1).returning(|| {
        Ok(ChatterSnapshot {
            viewers: names(&["v1"]),
            moderators: names(&["m1"]),
            vips: names(&["star"]),
        })
    });

    let mut economy = MockEconomy::new();
    economy
        .expect_grant_to_list()
        .with(eq(names(&["star", "v1", "m1"])), eq(2))
        .times(1)
        .returning(|_, _| Ok(()));

    let (coordinator, _feed) = coordinator(chatters, economy).await;
    let receipt = coordinator.run_payout(2, "star").await.unwrap();
    assert_eq!(receipt.recipients, 3);
}

#[tokio::test]
async fn grant_failure_propagates_and_suppresses_the_feed() {
    let mut chatters = MockChatters::new();
    chatters.expect_fetch().returning(|| {
        Ok(ChatterSnapshot {
            viewers: names(&["a"]),
            moderators: vec![],
            vips: vec![],
        })
    });

    let mut economy = MockEconomy::new();
    economy
        .expect_grant_to_list()
        .returning(|_, _| Err(Error::Platform("storage went away".into())));

    let (coordinator, mut feed) = coordinator(chatters, economy).await;
    let result = coordinator.run_payout(1, "someone").await;

    assert!(result.is_err());
    assert!(drain_feed(&mut feed).is_empty());
}

#[tokio::test]
async fn chatter_fetch_failure_propagates() {
    let mut chatters = MockChatters::new();
    chatters
        .expect_fetch()
        .returning(|| Err(Error::Platform("chatters endpoint down".into())));

    let (coordinator, mut feed) = coordinator(chatters, MockEconomy::new()).await;

    assert!(coordinator.run_payout(1, "someone").await.is_err());
    assert!(drain_feed(&mut feed).is_empty());
}

#[tokio::test]
async fn subscription_payout_pays_bonus_then_the_room() {
    let mut economy = MockEconomy::new();
    economy
        .expect_grant()
        .with(eq("subscriber"), eq(10))
        .times(1)
        .returning(|_, _| Ok(20));
    economy
        .expect_grant_to_list()
        .with(eq(names(&["x", "y"])), eq(1))
        .times(1)
        .returning(|_, _| Ok(()));

    let mut chatters = MockChatters::new();
    chatters.expect_fetch().times(1).returning(|| {
        Ok(ChatterSnapshot {
            viewers: names(&["x", "y"]),
            moderators: vec![],
            vips: vec![],
        })
    });

    let (coordinator, mut feed) = coordinator(chatters, economy).await;
    let receipt = coordinator.subscription_payout("subscriber").await.unwrap();

    assert_eq!(receipt.recipients, 2);
    let entries = drain_feed(&mut feed);
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("subscriber"));
    assert!(entries[1].contains("2"));
}
