// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, TicketKey};

#[test]
fn test_ticket_key_accepts_project_number() {
    let key: TicketKey = TicketKey::parse("SCOP-1001").unwrap();
    assert_eq!(key.value(), "SCOP-1001");
    assert_eq!(key.project(), "SCOP");
}

#[test]
fn test_ticket_key_trims_whitespace() {
    let key: TicketKey = TicketKey::parse("  OPS-7 ").unwrap();
    assert_eq!(key.value(), "OPS-7");
    assert_eq!(key, TicketKey::parse("OPS-7").unwrap());
}

#[test]
fn test_ticket_key_keeps_no_whitespace_and_rejects_inner_spaces() {
    let key: TicketKey = TicketKey::parse("\tSCOP-1001\n").unwrap();
    assert!(!key.value().chars().any(char::is_whitespace));
    assert_eq!(serde_json::to_string(&key).unwrap(), "\"SCOP-1001\"");

    for raw in ["SCOP -1001", "SCOP- 1001", "SC OP-1001"] {
        assert_eq!(
            TicketKey::parse(raw),
            Err(DomainError::InvalidTicketKey(raw.to_string()))
        );
    }
}

#[test]
fn test_ticket_key_rejects_malformed_keys() {
    let malformed = [
        "", "SCOP", "SCOP-", "-1001", "scop-1001", "Scop-1001", "SCOP-10a1", "SCOP1001",
        "SC0P-1001", "SCOP-1001-2", "SCOP_1001",
    ];

    for raw in malformed {
        assert!(
            matches!(TicketKey::parse(raw), Err(DomainError::InvalidTicketKey(_))),
            "'{raw}' should be rejected"
        );
    }
}

#[test]
fn test_ticket_key_serde_rejects_malformed_keys() {
    let ok: TicketKey = serde_json::from_str("\"SCOP-12\"").unwrap();
    assert_eq!(ok.value(), "SCOP-12");

    let bad: Result<TicketKey, _> = serde_json::from_str("\"nope\"");
    assert!(bad.is_err());
}
