//! Second grammar stage: event-name lookup and per-event payload shapes.

use fragstat_types::WORLD_TOKEN;
use memchr::memchr;
use phf::phf_map;

use super::ParseError;

/// Events the engine reacts to. Anything else in the log is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A match starts (`InitGame`)
    SessionOpen,
    /// A match ends (`Exit`, or `ShutdownGame` when the server stops mid-match)
    SessionClose,
    /// A client's userinfo, including its display name, changed
    IdentityChanged,
    /// A client connected. Names arrive later with `ClientUserinfoChanged`.
    ClientConnect,
    Kill,
}

static EVENT_KINDS: phf::Map<&'static str, EventKind> = phf_map! {
    "InitGame" => EventKind::SessionOpen,
    "Exit" => EventKind::SessionClose,
    "ShutdownGame" => EventKind::SessionClose,
    "ClientUserinfoChanged" => EventKind::IdentityChanged,
    "ClientConnect" => EventKind::ClientConnect,
    "Kill" => EventKind::Kill,
};

pub fn event_kind(event_name: &str) -> Option<EventKind> {
    EVENT_KINDS.get(event_name).copied()
}

/// `<killerId> <victimId> <causeId>: <killer> killed <victim> by <cause>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEvent<'a> {
    pub killer_id: u32,
    pub victim_id: u32,
    pub cause_id: u32,
    pub killer_name: &'a str,
    pub victim_name: &'a str,
    pub cause_name: &'a str,
}

impl KillEvent<'_> {
    /// Environmental death: no player gets the kill, the victim loses one.
    pub fn is_world_kill(&self) -> bool {
        self.killer_name == WORLD_TOKEN
    }
}

/// `<clientId> n\<name>\<key>\<value>...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientInfo<'a> {
    pub client_id: u32,
    pub raw_name: &'a str,
}

fn parse_id(field: &'static str, value: &str) -> Result<u32, ParseError> {
    value
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumericField {
            field,
            value: value.to_string(),
        })
}

/// Candidate splits of `text` around whitespace-delimited occurrences of
/// `keyword`, left to right. Both sides come back trimmed and non-empty.
fn split_keyword<'a>(text: &'a str, keyword: &str) -> impl Iterator<Item = (&'a str, &'a str)> {
    let keyword_len = keyword.len();
    text.match_indices(keyword).filter_map(move |(idx, _)| {
        let before = &text[..idx];
        let after = &text[idx + keyword_len..];
        if !before.ends_with(char::is_whitespace) || !after.starts_with(char::is_whitespace) {
            return None;
        }
        let (before, after) = (before.trim(), after.trim());
        (!before.is_empty() && !after.is_empty()).then_some((before, after))
    })
}

pub fn parse_kill(payload: &str) -> Result<KillEvent<'_>, ParseError> {
    let (ids, text) = payload
        .split_once(':')
        .ok_or(ParseError::malformed("kill payload has no ':' after the ids"))?;

    let mut fields = ids.split_whitespace();
    let (Some(killer), Some(victim), Some(cause), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseError::malformed("kill payload needs exactly three ids"));
    };
    let killer_id = parse_id("killer id", killer)?;
    let victim_id = parse_id("victim id", victim)?;
    let cause_id = parse_id("cause id", cause)?;

    // Killer names may themselves contain "killed"; take the first split
    // that still leaves a valid "<victim> by <cause>" tail.
    let (killer_name, victim_name, cause_name) = split_keyword(text, "killed")
        .find_map(|(killer, rest)| {
            split_keyword(rest, "by")
                .next()
                .map(|(victim, cause)| (killer, victim, cause))
        })
        .ok_or(ParseError::malformed(
            "kill payload is not '<killer> killed <victim> by <cause>'",
        ))?;

    Ok(KillEvent {
        killer_id,
        victim_id,
        cause_id,
        killer_name,
        victim_name,
        cause_name,
    })
}

pub fn parse_client_info(payload: &str) -> Result<ClientInfo<'_>, ParseError> {
    let (id, rest) = payload
        .split_once(char::is_whitespace)
        .ok_or(ParseError::malformed("client info has no userinfo string"))?;
    let client_id = parse_id("client id", id)?;

    let info = rest
        .trim_start()
        .strip_prefix("n\\")
        .ok_or(ParseError::malformed("client info does not start with a name"))?;
    let end = memchr(b'\\', info.as_bytes())
        .ok_or(ParseError::malformed("client name is not terminated"))?;
    if end == 0 {
        return Err(ParseError::malformed("client name is empty"));
    }

    Ok(ClientInfo {
        client_id,
        raw_name: &info[..end],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_lookup() {
        assert_eq!(event_kind("InitGame"), Some(EventKind::SessionOpen));
        assert_eq!(event_kind("Exit"), Some(EventKind::SessionClose));
        assert_eq!(event_kind("ShutdownGame"), Some(EventKind::SessionClose));
        assert_eq!(event_kind("ClientUserinfoChanged"), Some(EventKind::IdentityChanged));
        assert_eq!(event_kind("Kill"), Some(EventKind::Kill));
        assert_eq!(event_kind("Item"), None);
        assert_eq!(event_kind("kill"), None);
    }

    #[test]
    fn test_parse_kill() {
        let kill = parse_kill("2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH").unwrap();
        assert_eq!(kill.killer_id, 2);
        assert_eq!(kill.victim_id, 3);
        assert_eq!(kill.cause_id, 7);
        assert_eq!(kill.killer_name, "Isgalamido");
        assert_eq!(kill.victim_name, "Mocinha");
        assert_eq!(kill.cause_name, "MOD_ROCKET_SPLASH");
        assert!(!kill.is_world_kill());
    }

    #[test]
    fn test_parse_world_kill_with_spaced_names() {
        let kill = parse_kill("1022 2 22: <world> killed Dono da Bola by MOD_TRIGGER_HURT").unwrap();
        assert!(kill.is_world_kill());
        assert_eq!(kill.killer_id, 1022);
        assert_eq!(kill.victim_name, "Dono da Bola");
        assert_eq!(kill.cause_name, "MOD_TRIGGER_HURT");
    }

    #[test]
    fn test_parse_kill_names_containing_keywords() {
        let kill = parse_kill("3 4 10: Mr killed Stuff killed Zeh by MOD_RAILGUN").unwrap();
        assert_eq!(kill.killer_name, "Mr");
        assert_eq!(kill.victim_name, "Stuff killed Zeh");

        let kill = parse_kill("3 4 10: Assasinu Credi killed Stand by Me by MOD_SHOTGUN").unwrap();
        assert_eq!(kill.killer_name, "Assasinu Credi");
        assert_eq!(kill.victim_name, "Stand");
        assert_eq!(kill.cause_name, "Me by MOD_SHOTGUN");

        let kill = parse_kill("3 4 10: Unkilledable killed Zeh by MOD_MG").unwrap();
        assert_eq!(kill.killer_name, "Unkilledable");
    }

    #[test]
    fn test_parse_kill_invalid_ids() {
        assert_eq!(
            parse_kill("x 2 10: a killed b by c"),
            Err(ParseError::InvalidNumericField {
                field: "killer id",
                value: "x".to_string()
            })
        );
        assert!(matches!(
            parse_kill("3 -2 10: a killed b by c"),
            Err(ParseError::InvalidNumericField { field: "victim id", .. })
        ));
    }

    #[test]
    fn test_parse_kill_malformed() {
        let cases = [
            "3 2 10 Isgalamido killed Zeh by MOD_RAILGUN",
            "3 2: Isgalamido killed Zeh by MOD_RAILGUN",
            "3 2 10 4: Isgalamido killed Zeh by MOD_RAILGUN",
            "3 2 10: Isgalamido fragged Zeh by MOD_RAILGUN",
            "3 2 10: Isgalamido killed Zeh with MOD_RAILGUN",
            "3 2 10: killed Zeh by MOD_RAILGUN",
            "3 2 10: Isgalamido killed Zeh by ",
        ];
        for payload in cases {
            assert!(
                matches!(parse_kill(payload), Err(ParseError::MalformedLine { .. })),
                "expected malformed: {payload:?}"
            );
        }
    }

    #[test]
    fn test_parse_client_info() {
        let info = parse_client_info(r#"2 n\Dono da Bola\t\0\model\sarge/krusade\hmodel\sarge"#).unwrap();
        assert_eq!(info.client_id, 2);
        assert_eq!(info.raw_name, "Dono da Bola");

        let info = parse_client_info(r#"5 n\Zeh!\t\0"#).unwrap();
        assert_eq!(info.raw_name, "Zeh!");
    }

    #[test]
    fn test_parse_client_info_errors() {
        assert!(matches!(
            parse_client_info(r#"two n\Zeh\t\0"#),
            Err(ParseError::InvalidNumericField { field: "client id", .. })
        ));
        assert!(matches!(
            parse_client_info(r#"2 t\0\n\Zeh\"#),
            Err(ParseError::MalformedLine { .. })
        ));
        assert!(matches!(
            parse_client_info(r#"2 n\Zeh"#),
            Err(ParseError::MalformedLine { .. })
        ));
        assert!(matches!(
            parse_client_info(r#"2 n\\t\0"#),
            Err(ParseError::MalformedLine { .. })
        ));
        assert!(matches!(parse_client_info("2"), Err(ParseError::MalformedLine { .. })));
    }
}
