use std::sync::Arc;

use super::{EventHandler, HandlerError};
use crate::events::{DeathEvent, EventKind, GameEvent, PlayerIdentity};
use crate::notify::{Notification, Notifier};
use crate::rules::RuleSet;

/// Scores deaths of marked players and tells everyone involved.
pub struct PlayerDeathHandler {
    rules: RuleSet,
    notifier: Arc<dyn Notifier>,
}

impl PlayerDeathHandler {
    pub fn new(rules: RuleSet, notifier: Arc<dyn Notifier>) -> Self {
        Self { rules, notifier }
    }

    pub async fn handle_death(&self, event: &DeathEvent) -> Result<(), HandlerError> {
        if !event.victim.is_marked() {
            return Ok(());
        }
        let Some((client_id, steam_id)) = event.victim.addressable() else {
            return Ok(());
        };

        let score = self.rules.score(event);
        if score.total == 0 {
            return Ok(());
        }

        tracing::info!(
            victim = event.victim.display_name(),
            drinks = score.total,
            rules = ?score.contributions.iter().map(|c| c.rule).collect::<Vec<_>>(),
            "Player drinks"
        );

        self.notifier
            .notify(&Notification::drink(client_id, steam_id, score.messages()))
            .await?;

        if !self.notifier.supports_credit() {
            return Ok(());
        }

        let credit = format!(
            "You made {} drink {}",
            event.victim.display_name(),
            score.total
        );
        for player in [&event.attacker, &event.assister] {
            if let Some((id, steam_id)) = creditable(player, &event.victim) {
                self.notifier
                    .notify(&Notification::tell(id, steam_id, vec![credit.clone()]))
                    .await?;
            }
        }

        Ok(())
    }
}

/// A marked, addressable player other than the victim.
fn creditable<'a>(player: &'a PlayerIdentity, victim: &PlayerIdentity) -> Option<(i32, &'a str)> {
    let (id, steam_id) = player.addressable()?;
    (player.is_marked() && Some(id) != victim.client_id).then_some((id, steam_id))
}

#[async_trait::async_trait]
impl EventHandler for PlayerDeathHandler {
    async fn handle(&self, event: &GameEvent) -> Result<(), HandlerError> {
        match event {
            GameEvent::PlayerDeath(death) => self.handle_death(death).await,
            other => Err(HandlerError::UnexpectedEvent {
                expected: EventKind::PlayerDeath,
                received: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotifyError;
    use crate::tf_ids::damage_bits;
    use tokio::sync::Mutex;

    /// Records notifications instead of writing them anywhere.
    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<Notification>>,
        credit: bool,
    }

    impl RecordingNotifier {
        fn new(credit: bool) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                credit,
            })
        }

        async fn sent(&self) -> Vec<Notification> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait::async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
            self.sent.lock().await.push(notification.clone());
            Ok(())
        }

        fn supports_credit(&self) -> bool {
            self.credit
        }
    }

    fn player(client_id: i32, name: &str) -> PlayerIdentity {
        PlayerIdentity {
            client_id: Some(client_id),
            name: Some(name.to_string()),
            steam_id: Some(format!("S{client_id}")),
        }
    }

    fn handler(notifier: &Arc<RecordingNotifier>) -> PlayerDeathHandler {
        PlayerDeathHandler::new(RuleSet::canonical(), notifier.clone())
    }

    fn ubersaw_death() -> DeathEvent {
        DeathEvent {
            victim: player(1, "[DG] Alice"),
            attacker: player(2, "[DG] Bob"),
            weapon: Some("ubersaw".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_victim_and_attacker_notified() {
        let notifier = RecordingNotifier::new(true);
        handler(&notifier)
            .handle(&GameEvent::PlayerDeath(ubersaw_death()))
            .await
            .unwrap();

        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[0],
            Notification::drink(
                1,
                "S1",
                vec![
                    "[+1] You were killed by [DG]".to_string(),
                    "[+2] Killed by a special weapon".to_string(),
                    "Total: 3".to_string(),
                ]
            )
        );
        assert_eq!(
            sent[1],
            Notification::tell(2, "S2", vec!["You made [DG] Alice drink 3".to_string()])
        );
    }

    #[tokio::test]
    async fn test_marked_assister_credited() {
        let notifier = RecordingNotifier::new(true);
        let mut event = ubersaw_death();
        event.assister = player(3, "{SG} Carol");

        handler(&notifier).handle_death(&event).await.unwrap();

        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].messages.last().unwrap(), "Total: 5");
        assert_eq!(sent[1].client_id, 2);
        assert_eq!(sent[2].client_id, 3);
        assert_eq!(sent[2].messages, vec!["You made [DG] Alice drink 5"]);
    }

    #[tokio::test]
    async fn test_unmarked_victim_ignored() {
        let notifier = RecordingNotifier::new(true);
        let mut event = ubersaw_death();
        event.victim.name = Some("Alice".to_string());
        event.damage_bits = Some(damage_bits::VEHICLE);

        handler(&notifier).handle_death(&event).await.unwrap();
        assert!(notifier.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_victim_without_ids_ignored() {
        let notifier = RecordingNotifier::new(true);
        let mut event = ubersaw_death();
        event.victim.steam_id = None;
        handler(&notifier).handle_death(&event).await.unwrap();

        let mut event = ubersaw_death();
        event.victim.client_id = None;
        handler(&notifier).handle_death(&event).await.unwrap();

        assert!(notifier.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_total_sends_nothing() {
        let notifier = RecordingNotifier::new(true);
        let mut event = ubersaw_death();
        event.attacker = player(2, "Bob");

        handler(&notifier).handle_death(&event).await.unwrap();
        assert!(notifier.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_suicide_not_credited() {
        let notifier = RecordingNotifier::new(true);
        let event = DeathEvent {
            victim: player(1, "[DG] Alice"),
            attacker: player(1, "[DG] Alice"),
            weapon: Some("ubersaw".to_string()),
            ..Default::default()
        };

        handler(&notifier).handle_death(&event).await.unwrap();

        // The special weapon rule has no suicide guard, so the victim still drinks.
        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].client_id, 1);
        assert_eq!(
            sent[0].messages,
            vec!["[+2] Killed by a special weapon", "Total: 2"]
        );
    }

    #[tokio::test]
    async fn test_assister_who_is_victim_not_credited() {
        let notifier = RecordingNotifier::new(true);
        let mut event = ubersaw_death();
        event.assister = player(1, "[DG] Alice");

        handler(&notifier).handle_death(&event).await.unwrap();

        let sent = notifier.sent().await;
        let recipients: Vec<i32> = sent.iter().map(|n| n.client_id).collect();
        assert_eq!(recipients, vec![1, 2]);
        assert_eq!(sent[0].messages.last().unwrap(), "Total: 5");
        assert_eq!(sent[1].messages, vec!["You made [DG] Alice drink 5"]);
    }

    #[tokio::test]
    async fn test_vehicle_kill_by_unmarked_attacker() {
        let notifier = RecordingNotifier::new(true);
        let event = DeathEvent {
            victim: player(1, "[SCG] Alice"),
            attacker: player(2, "Bob"),
            damage_bits: Some(damage_bits::VEHICLE),
            ..Default::default()
        };

        handler(&notifier).handle_death(&event).await.unwrap();

        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].messages.last().unwrap(), "Total: 6");
    }

    #[tokio::test]
    async fn test_no_credit_without_support() {
        let notifier = RecordingNotifier::new(false);
        handler(&notifier)
            .handle_death(&ubersaw_death())
            .await
            .unwrap();

        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].client_id, 1);
    }

    #[tokio::test]
    async fn test_wrong_event_rejected() {
        let notifier = RecordingNotifier::new(true);
        let err = handler(&notifier)
            .handle(&GameEvent::ObjectDestroyed(ubersaw_death()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HandlerError::UnexpectedEvent {
                received: EventKind::ObjectDestroyed,
                ..
            }
        ));
        assert!(!err.is_infrastructure());
    }
}
