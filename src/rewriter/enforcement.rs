//! Runtime enforcement script.
//!
//! Some pages render their branding from their own scripts after load, which
//! undoes static substitution. The enforcer re-applies the replacement pairs
//! in the browser: a fixed number of delayed passes, then one pass per body
//! mutation. Each pass is idempotent and guarded against re-entry.

use serde::Serialize;

use crate::errors::RebrandResult;

/// `id` of the injected `<script>` element
pub const ENFORCER_ELEMENT_ID: &str = "rebrand-enforcer";

/// One search → replacement pair shipped to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnforcedPair {
    pub from: String,
    pub to: String,
}

const ENFORCER_BODY: &str = r#"
  var applying = false;
  var skip = /^(SCRIPT|STYLE|TEXTAREA|CODE|PRE)$/;
  function apply() {
    if (applying || !document.body) return;
    applying = true;
    try {
      var walker = document.createTreeWalker(document.body, NodeFilter.SHOW_TEXT, null);
      var node;
      while ((node = walker.nextNode())) {
        var parent = node.parentNode;
        if (parent && skip.test(parent.nodeName)) continue;
        var value = node.nodeValue;
        var next = value;
        for (var i = 0; i < pairs.length; i++) {
          if (next.indexOf(pairs[i].from) !== -1) next = next.split(pairs[i].from).join(pairs[i].to);
        }
        if (next !== value) node.nodeValue = next;
      }
    } finally {
      applying = false;
    }
  }
  function observe() {
    if (!window.MutationObserver || !document.body) return;
    new MutationObserver(function () {
      if (!applying) apply();
    }).observe(document.body, { childList: true, subtree: true, characterData: true });
  }
  function retry(left) {
    apply();
    if (left > 0) {
      setTimeout(function () { retry(left - 1); }, interval);
    } else {
      observe();
    }
  }
  if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', function () { retry(budget); });
  } else {
    retry(budget);
  }
"#;

/// Pairs that can be applied repeatedly without compounding.
///
/// Pairs whose replacement contains the search text are dropped, as are
/// empty and identical pairs.
#[must_use]
pub fn enforceable_pairs(pairs: &[(String, String)]) -> Vec<EnforcedPair> {
    let mut out: Vec<EnforcedPair> = Vec::new();
    for (from, to) in pairs {
        let from = from.trim();
        if !super::substitution::is_substitutable(from, to) || to.contains(from) {
            continue;
        }
        if out.iter().any(|p| p.from == from) {
            continue;
        }
        out.push(EnforcedPair {
            from: from.to_string(),
            to: to.clone(),
        });
    }
    out
}

/// Full `<script>` element for the given pairs, or `None` when there is
/// nothing to enforce.
///
/// # Errors
///
/// Returns `RebrandError::Serialization` if the pairs cannot be encoded.
pub fn enforcer_script(
    pairs: &[EnforcedPair],
    retry_budget: u32,
    retry_interval_ms: u32,
) -> RebrandResult<Option<String>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    // `</` inside a script element would end it early
    let json = serde_json::to_string(pairs)?.replace("</", "<\\/");

    Ok(Some(format!(
        "<script id=\"{ENFORCER_ELEMENT_ID}\">(function () {{\n  var pairs = {json};\n  var budget = {retry_budget};\n  var interval = {retry_interval_ms};{ENFORCER_BODY}}})();</script>"
    )))
}
