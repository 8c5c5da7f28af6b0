//! Unit tests for the Identifiers module

use core_kernel::{EntryId, FriendId, LedgerId};
use uuid::Uuid;

mod friend_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = FriendId::new();
        let id2 = FriendId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = FriendId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = FriendId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_display_carries_prefix() {
        let id = FriendId::new();
        assert!(id.to_string().starts_with("FRD-"));
        assert_eq!(FriendId::prefix(), "FRD");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let id = FriendId::new();
        let with_prefix: FriendId = id.to_string().parse().unwrap();
        let without_prefix: FriendId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, with_prefix);
        assert_eq!(id, without_prefix);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result: Result<FriendId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }
}

mod other_id_tests {
    use super::*;

    #[test]
    fn test_ledger_id_prefix() {
        assert!(LedgerId::new().to_string().starts_with("LDG-"));
    }

    #[test]
    fn test_entry_id_prefix() {
        assert!(EntryId::new().to_string().starts_with("ENT-"));
    }

    #[test]
    fn test_from_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = LedgerId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_serde_transparent() {
        let id = FriendId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
