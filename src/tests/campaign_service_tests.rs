//! tests/campaign_service_tests.rs
//! Pruebas del estado del panel: carga, corrida única y cancelación.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_rt::test;

    use crate::models::recipient_model::RecipientStatus;
    use crate::services::campaign_service::{CampaignError, CampaignService};
    use crate::tests::support::{dispatcher_with, StubReply, StubSender};

    #[test]
    async fn test_load_and_run_to_completion() {
        let sender = Arc::new(StubSender::new().reply("b@y.com", StubReply::Fail("rejected")));
        let service = CampaignService::new(dispatcher_with(sender));

        let records = service
            .load_contacts(b"Acme,a@x.com\nBeta,b@y.com\n")
            .await
            .expect("No se cargaron los contactos");
        assert_eq!(records.len(), 2);
        assert!(service.snapshot().await.is_none());

        let handle = service.start_run().await.expect("No se inició la corrida");
        let run = handle.join.await.expect("La tarea falló");

        assert_eq!(run.id, handle.run_id);
        assert_eq!(run.success_count(), 1);
        assert_eq!(run.failure_count(), 1);

        let snapshot = service.snapshot().await.expect("Sin instantánea");
        assert!(snapshot.is_complete());
        assert_eq!(snapshot.records[1].status, RecipientStatus::Failed);

        // la lista cargada sigue en "pending" para la próxima corrida
        let contacts = service.contacts().await;
        assert!(contacts.iter().all(|r| r.status == RecipientStatus::Pending));
    }

    #[test]
    async fn test_start_without_contacts() {
        let service = CampaignService::new(dispatcher_with(Arc::new(StubSender::new())));
        assert!(matches!(
            service.start_run().await,
            Err(CampaignError::NoContacts)
        ));
    }

    #[test]
    async fn test_single_active_run() {
        let sender = Arc::new(StubSender::new().reply("a@x.com", StubReply::Hang));
        let service = CampaignService::new(dispatcher_with(sender));
        service.load_contacts(b"A,a@x.com\nB,b@x.com").await.unwrap();

        let handle = service.start_run().await.unwrap();

        assert!(matches!(
            service.start_run().await,
            Err(CampaignError::RunInProgress)
        ));
        assert!(matches!(
            service.load_contacts(b"C,c@x.com").await,
            Err(CampaignError::RunInProgress)
        ));

        let snapshot = service.snapshot().await.unwrap();
        assert!(!snapshot.is_complete());

        handle.join.abort();
    }

    #[test]
    async fn test_cancel_requires_active_run() {
        let service = CampaignService::new(dispatcher_with(Arc::new(StubSender::new())));
        assert!(!service.cancel().await);
    }

    #[test]
    async fn test_invalid_upload_is_parse_error() {
        let service = CampaignService::new(dispatcher_with(Arc::new(StubSender::new())));
        assert!(matches!(
            service.load_contacts(b"\xc3\x28").await,
            Err(CampaignError::Parse(_))
        ));
    }

    #[test]
    async fn test_panicking_sender_releases_panel() {
        let sender = Arc::new(StubSender::new().reply("a@x.com", StubReply::Panic));
        let service = CampaignService::new(dispatcher_with(sender));
        service.load_contacts(b"A,a@x.com\nB,b@x.com").await.unwrap();

        let handle = service.start_run().await.unwrap();
        assert!(handle.join.await.is_err());

        let snapshot = service.snapshot().await.expect("Sin instantánea");
        assert!(snapshot.is_complete());
        assert!(snapshot.cancelled);
        assert_eq!(snapshot.records[0].status, RecipientStatus::Pending);
        assert!(!service.cancel().await);

        // el panel vuelve a aceptar cargas y corridas
        service
            .load_contacts(b"B,b@x.com")
            .await
            .expect("La carga sigue bloqueada");
        let run = service
            .start_run()
            .await
            .expect("La corrida sigue bloqueada")
            .join
            .await
            .unwrap();
        assert_eq!(run.success_count(), 1);
    }

    #[test]
    async fn test_aborted_run_releases_panel() {
        let sender = Arc::new(StubSender::new().reply("a@x.com", StubReply::Hang));
        let service = CampaignService::new(dispatcher_with(sender));
        service.load_contacts(b"A,a@x.com").await.unwrap();

        let handle = service.start_run().await.unwrap();
        handle.join.abort();
        assert!(handle.join.await.unwrap_err().is_cancelled());

        let snapshot = service.snapshot().await.unwrap();
        assert!(snapshot.is_complete());
        assert!(matches!(
            service.start_run().await,
            Ok(_)
        ));
    }
}
