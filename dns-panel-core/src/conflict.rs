//! 记录冲突前置检查
//!
//! 在调用服务商接口之前判断一次创建是否合法，避免把语义上不成立的
//! 记录组合推到上游（部分服务商会静默接受并破坏解析）。

use dns_panel_provider::{RecordType, RemoteRecord};

use crate::error::{CoreError, CoreResult};

/// 检查在 `full_name` 处创建一条 `desired_type`/`content` 记录是否合法
///
/// 规则（主机名比较不区分大小写）：
/// - 同类型且内容相同 → 完全重复，拒绝
/// - 同类型且内容不同 → 冲突（无法确定目标记录，应走编辑而非创建）
/// - 两者都属于互斥集 {A, AAAA, CNAME} → 冲突，与内容无关
/// - 其余组合合法，同一主机名可以共存多种独立类型
pub fn check_create(
    existing: &[RemoteRecord],
    full_name: &str,
    desired_type: RecordType,
    content: &str,
) -> CoreResult<()> {
    for record in existing {
        if !record.name.eq_ignore_ascii_case(full_name) {
            continue;
        }

        if record.record_type == desired_type {
            if record.content == content {
                return Err(CoreError::Duplicate {
                    full_name: full_name.to_string(),
                    record_type: desired_type.as_str().to_string(),
                    content: content.to_string(),
                });
            }
            return Err(conflict_with(record, full_name, desired_type));
        }

        if record.record_type.is_address_like() && desired_type.is_address_like() {
            return Err(conflict_with(record, full_name, desired_type));
        }
    }

    Ok(())
}

fn conflict_with(record: &RemoteRecord, full_name: &str, desired_type: RecordType) -> CoreError {
    CoreError::Conflict {
        full_name: full_name.to_string(),
        existing_type: record.record_type.as_str().to_string(),
        existing_content: record.content.clone(),
        desired_type: desired_type.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(name: &str, record_type: RecordType, content: &str) -> RemoteRecord {
        RemoteRecord {
            id: format!("r-{name}-{content}"),
            name: name.to_string(),
            record_type,
            content: content.to_string(),
            proxied: None,
            fallback_origin: false,
        }
    }

    #[test]
    fn test_empty_zone_is_legal() {
        assert!(check_create(&[], "www.example.com", RecordType::A, "1.1.1.1").is_ok());
    }

    #[test]
    fn test_cname_over_a_conflicts() {
        let existing = [remote("www.example.com", RecordType::A, "1.1.1.1")];
        let err = check_create(&existing, "www.example.com", RecordType::Cname, "example.net")
            .unwrap_err();
        match err {
            CoreError::Conflict {
                full_name,
                existing_content,
                ..
            } => {
                assert_eq!(full_name, "www.example.com");
                assert_eq!(existing_content, "1.1.1.1");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_aaaa_over_a_conflicts_regardless_of_content() {
        let existing = [remote("www.example.com", RecordType::A, "1.1.1.1")];
        assert!(matches!(
            check_create(&existing, "www.example.com", RecordType::Aaaa, "::1").unwrap_err(),
            CoreError::Conflict { .. }
        ));
    }

    #[test]
    fn test_second_a_with_different_content_conflicts() {
        let existing = [remote("www.example.com", RecordType::A, "1.1.1.1")];
        assert!(matches!(
            check_create(&existing, "www.example.com", RecordType::A, "2.2.2.2").unwrap_err(),
            CoreError::Conflict { .. }
        ));
    }

    #[test]
    fn test_identical_record_is_duplicate_not_conflict() {
        let existing = [remote("www.example.com", RecordType::A, "1.1.1.1")];
        assert!(matches!(
            check_create(&existing, "www.example.com", RecordType::A, "1.1.1.1").unwrap_err(),
            CoreError::Duplicate { .. }
        ));
    }

    #[test]
    fn test_txt_beside_a_is_legal() {
        let existing = [remote("www.example.com", RecordType::A, "1.1.1.1")];
        assert!(check_create(
            &existing,
            "www.example.com",
            RecordType::Txt,
            "v=spf1 -all"
        )
        .is_ok());
    }

    #[test]
    fn test_same_type_txt_different_content_conflicts() {
        // 同类型不同内容一律冲突，即便该类型本身允许多值。
        // 创建歧义（无法确定要编辑哪条）优先于多值语义。
        let existing = [remote("example.com", RecordType::Txt, "v=spf1 -all")];
        assert!(matches!(
            check_create(&existing, "example.com", RecordType::Txt, "verify=abc").unwrap_err(),
            CoreError::Conflict { .. }
        ));
    }

    #[test]
    fn test_name_compare_is_case_insensitive() {
        let existing = [remote("WWW.Example.COM", RecordType::A, "1.1.1.1")];
        assert!(matches!(
            check_create(&existing, "www.example.com", RecordType::Cname, "example.net")
                .unwrap_err(),
            CoreError::Conflict { .. }
        ));
    }

    #[test]
    fn test_other_names_do_not_interfere() {
        let existing = [
            remote("www.example.com", RecordType::A, "1.1.1.1"),
            remote("api.example.com", RecordType::Cname, "edge.example.net"),
        ];
        assert!(check_create(&existing, "mail.example.com", RecordType::A, "3.3.3.3").is_ok());
    }

    #[test]
    fn test_mx_beside_ns_is_legal() {
        let existing = [remote("example.com", RecordType::Ns, "ns1.example.net")];
        assert!(check_create(
            &existing,
            "example.com",
            RecordType::Mx,
            "10 mail.example.com"
        )
        .is_ok());
    }
}
