use super::*;

#[test]
fn default_label_markup() {
    assert_eq!(pending_markup("Sending..."), r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#);
}

#[test]
fn label_is_escaped() {
    assert_eq!(
        pending_markup(r#"<b>"Q&A"</b>'s"#),
        r#"<i class="fas fa-spinner fa-spin"></i> &lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt;&#39;s"#
    );
}

#[test]
fn non_ascii_label_passes_through() {
    assert!(pending_markup("Envoi…").ends_with(" Envoi…"));
}
