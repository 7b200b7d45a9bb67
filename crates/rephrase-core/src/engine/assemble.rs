use crate::candidates::{Candidate, Origin};

/// Final list: external, then rule-based in generation order, then
/// fallback; at most `k`. An empty pool yields the source alone.
pub(super) fn assemble(source: &str, mut pool: Vec<Candidate>, k: usize) -> Vec<Candidate> {
    // Stable: generation order is kept within each origin.
    pool.sort_by_key(|c| c.origin.priority());
    pool.truncate(k);
    if pool.is_empty() {
        pool.push(Candidate {
            text: source.to_string(),
            origin: Origin::Original,
        });
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(text: &str, origin: Origin) -> Candidate {
        Candidate {
            text: text.into(),
            origin,
        }
    }

    #[test]
    fn orders_by_origin_stably() {
        let out = assemble(
            "src",
            vec![
                c("r1", Origin::Rule),
                c("f1", Origin::Fallback),
                c("e1", Origin::External),
                c("r2", Origin::Rule),
            ],
            3,
        );
        let texts: Vec<&str> = out.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["e1", "r1", "r2"]);
    }

    #[test]
    fn empty_pool_returns_source() {
        let out = assemble("src", Vec::new(), 2);
        assert_eq!(out, vec![c("src", Origin::Original)]);
    }
}
