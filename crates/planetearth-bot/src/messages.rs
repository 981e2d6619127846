//! User-facing text

pub const API_UNAVAILABLE: &str =
    "PlanetEarth API가 응답하지 않습니다. 디스코드 공지를 참고해주세요.";
pub const RATE_LIMITED: &str = "봇의 요청이 제한되었습니다.";
pub const UNKNOWN_ERROR: &str = "알 수 없는 오류가 발생했습니다.";
pub const GUILD_NOT_ELIGIBLE: &str = "이 서버에서는 PlanetEarth 봇을 사용할 수 없습니다.";
pub const MISSING_ARGUMENT: &str = "이름을 입력해주세요.";
pub const UNKNOWN_COMMAND: &str = "지원하지 않는 명령어입니다.";

pub const RESIDENT_NOT_FOUND: &str = "존재하지 않는 플레이어입니다!";
pub const TOWN_NOT_FOUND: &str = "존재하지 않는 마을입니다!";
pub const NATION_NOT_FOUND: &str = "존재하지 않는 국가입니다!";

/// Placeholder for an empty town/nation/allies/enemies field.
pub const NONE: &str = "없음";

pub const HELP: &str = "## PlanetEarth 봇 소개\n\n\
PlanetEarth 에 관련된 유용한 기능을 제공합니다.\n\n\
### 기능\n\
```- 새로운 유저가 디스코드 서버에 들어올 때 PlanetEarth 에 인증된 유저인지 확인하고, 이름을 닉네임으로 설정합니다.\n\
- 서버에 '인증됨' 역할이 있을 경우 자동으로 역할을 지급합니다.```\n\n\
### 명령어\n\
```/resident - 플레이어 정보를 확인합니다.\n\
/town - 마을 정보를 확인합니다.\n\
/nation - 국가 정보를 확인합니다.```";

pub fn mention(user_id: u64) -> String {
    format!("<@{user_id}>")
}

// ── verification notices ──────────────────────────────────────────────────────

pub fn join_api_unavailable(mention: &str) -> String {
    format!("PlanetEarth API가 응답하지 않습니다. {mention} 의 인증에 실패했습니다.")
}

pub fn join_not_verified(mention: &str) -> String {
    format!("{mention} (은)는 PlanetEarth 디스코드에 인증되지 않은 유저입니다.")
}

pub fn join_rate_limited(mention: &str) -> String {
    format!("봇의 요청이 제한되었습니다. {mention} 의 인증에 실패했습니다.")
}

pub fn join_unknown_error(mention: &str) -> String {
    format!("알 수 없는 오류가 발생했습니다. {mention} 의 인증에 실패했습니다.")
}

pub const NICKNAME_PERMISSION_DENIED: &str = "닉네임을 변경할 권한이 없습니다.";
pub const NICKNAME_FAILED: &str = "닉네임을 변경하지 못했습니다.";
pub const ROLE_LIST_FAILED: &str = "서버의 역할 목록을 불러오지 못했습니다.";

pub fn role_not_found(role: &str) -> String {
    format!("서버에서 {role} 역할을 찾을 수 없습니다.")
}

pub fn role_ambiguous(role: &str) -> String {
    format!("{role} 이름의 역할이 여러 개 있어 역할을 지급하지 않았습니다.")
}

pub fn role_permission_denied(role: &str) -> String {
    format!("{role} 역할을 지급할 권한이 없습니다.")
}

pub fn role_failed(role: &str) -> String {
    format!("{role} 역할을 지급하지 못했습니다.")
}

/// One notice listing every step that did not go through.
pub fn verification_incomplete(mention: &str, reasons: &[String]) -> String {
    let mut text = format!("{mention} 의 인증 처리 중 일부 작업에 실패했습니다.");
    for reason in reasons {
        text.push_str("\n- ");
        text.push_str(reason);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_format() {
        assert_eq!(mention(42), "<@42>");
    }

    #[test]
    fn test_verification_incomplete_lists_reasons_in_order() {
        let text = verification_incomplete(
            "<@1>",
            &["first".to_string(), "second".to_string()],
        );
        assert!(text.starts_with("<@1> "));
        let first = text.find("- first").unwrap();
        let second = text.find("- second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_join_messages_reference_member() {
        for text in [
            join_api_unavailable("<@7>"),
            join_not_verified("<@7>"),
            join_rate_limited("<@7>"),
            join_unknown_error("<@7>"),
        ] {
            assert!(text.contains("<@7>"), "{text}");
        }
    }
}
