use crate::error::EncodeError;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

// 把域名从转换为 C 风格的字符串，每个 label 前面是它的长度，最后以 0 结尾
//
// 末尾的一个 '.' 表示根域名，可以省略。
pub fn domain_to_qname(domain: &str) -> Result<Vec<u8>, EncodeError> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
        return Err(EncodeError::EmptyName);
    }

    let mut qname: Vec<u8> = Vec::with_capacity(domain.len() + 2);

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(EncodeError::EmptyLabel(domain.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(EncodeError::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
            });
        }

        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }

    qname.push(0);

    if qname.len() > MAX_NAME_LEN {
        return Err(EncodeError::NameTooLong(qname.len()));
    }

    Ok(qname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_length_prefixed() {
        let qname = domain_to_qname("a.bb.ccc").unwrap();

        assert_eq!(
            vec![1, b'a', 2, b'b', b'b', 3, b'c', b'c', b'c', 0],
            qname
        );
    }

    #[test]
    fn trailing_dot_is_root() {
        assert_eq!(
            domain_to_qname("example.com").unwrap(),
            domain_to_qname("example.com.").unwrap()
        );
    }

    #[test]
    fn rejects_empty_names_and_labels() {
        assert!(matches!(domain_to_qname(""), Err(EncodeError::EmptyName)));
        assert!(matches!(domain_to_qname("."), Err(EncodeError::EmptyName)));
        assert!(matches!(domain_to_qname(".com"), Err(EncodeError::EmptyLabel(_))));
        assert!(matches!(domain_to_qname("a..com"), Err(EncodeError::EmptyLabel(_))));
    }

    #[test]
    fn label_length_limit() {
        let ok = format!("{}.com", "x".repeat(63));
        assert!(domain_to_qname(&ok).is_ok());

        let too_long = format!("{}.com", "x".repeat(64));
        assert!(matches!(
            domain_to_qname(&too_long),
            Err(EncodeError::LabelTooLong { len: 64, .. })
        ));
    }

    #[test]
    fn name_length_limit() {
        // 4 个 63 字节的 label 编码后是 4 * 64 + 1 = 257 字节
        let labels = vec!["y".repeat(63); 4];
        let name = labels.join(".");

        assert!(matches!(
            domain_to_qname(&name),
            Err(EncodeError::NameTooLong(257))
        ));

        // 3 * 64 + 62 + 1 = 255
        let name = format!("{}.{}", vec!["y".repeat(63); 3].join("."), "z".repeat(61));
        assert_eq!(255, domain_to_qname(&name).unwrap().len());
    }
}
