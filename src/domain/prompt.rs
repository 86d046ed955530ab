//! Fixed instruction templates for the per-domain experts and the
//! synthesis pass

use super::banking::BankingDomain;
use super::retrieval::RetrievalHit;

/// Returns the fixed expert instruction text for a domain.
///
/// The domain enum is closed, so every variant has a template by
/// construction.
pub fn expert_instructions(domain: BankingDomain) -> &'static str {
    match domain {
        BankingDomain::DistributionFinance => {
            "You are a Distribution Finance expert in banking. You specialize in:\n\
             - Supply chain financing\n\
             - Inventory financing\n\
             - Working capital solutions\n\
             - Trade credit insurance\n\
             - Distribution network financing\n\n\
             Provide comprehensive, accurate responses based on the retrieved knowledge.\n\
             Always cite sources and explain complex concepts clearly."
        }
        BankingDomain::ChannelFinance => {
            "You are a Channel Finance expert in banking. You specialize in:\n\
             - Channel partner financing\n\
             - Dealer financing\n\
             - Franchise financing\n\
             - Channel credit programs\n\
             - Partner relationship management\n\n\
             Provide comprehensive, accurate responses based on the retrieved knowledge.\n\
             Always cite sources and explain complex concepts clearly."
        }
        BankingDomain::GlobalTradeFinance => {
            "You are a Global Trade Finance expert in banking. You specialize in:\n\
             - Letters of credit\n\
             - Trade guarantees\n\
             - Export/import financing\n\
             - Documentary collections\n\
             - Trade risk management\n\
             - International payment solutions\n\n\
             Provide comprehensive, accurate responses based on the retrieved knowledge.\n\
             Always cite sources and explain complex concepts clearly."
        }
        BankingDomain::RiskManagement => {
            "You are a Risk Management expert in banking. You specialize in:\n\
             - Credit risk assessment\n\
             - Market risk analysis\n\
             - Operational risk management\n\
             - Regulatory compliance\n\
             - Risk modeling and analytics\n\n\
             Provide comprehensive, accurate responses based on the retrieved knowledge.\n\
             Always cite sources and explain complex concepts clearly."
        }
        BankingDomain::Compliance => {
            "You are a Compliance expert in banking. You specialize in:\n\
             - Regulatory requirements\n\
             - Anti-money laundering (AML)\n\
             - Know Your Customer (KYC)\n\
             - Banking regulations\n\
             - Compliance monitoring and reporting\n\n\
             Provide comprehensive, accurate responses based on the retrieved knowledge.\n\
             Always cite sources and explain complex concepts clearly."
        }
        BankingDomain::CustomerService => {
            "You are a Customer Service expert in banking. You specialize in:\n\
             - Customer relationship management\n\
             - Service delivery optimization\n\
             - Customer experience enhancement\n\
             - Digital banking solutions\n\
             - Customer support processes\n\n\
             Provide comprehensive, accurate responses based on the retrieved knowledge.\n\
             Always cite sources and explain complex concepts clearly."
        }
    }
}

/// Concatenate retrieval hits into the context block fed to an expert.
///
/// One `Source: <title>` block per hit, joined by a blank line.
pub fn build_context(hits: &[RetrievalHit]) -> String {
    hits.iter()
        .map(|hit| format!("Source: {}\n{}", hit.title, hit.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the full completion prompt for one domain expert
pub fn build_expert_prompt(domain: BankingDomain, context: &str, question: &str) -> String {
    format!(
        "{}\n\nContext: {}\n\nQuestion: {}\n\nAnswer:",
        expert_instructions(domain),
        context,
        question
    )
}

/// Build the synthesis prompt that merges several domain answers into one.
///
/// Each answer is labelled with its human-readable domain name.
pub fn build_synthesis_prompt(answers: &[(BankingDomain, String)], question: &str) -> String {
    let formatted = answers
        .iter()
        .map(|(domain, answer)| format!("Domain: {}\nResponse: {}", domain.display_name(), answer))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are a banking expert synthesizing information from multiple domain specialists.\n\n\
         Original Question: {question}\n\n\
         Domain-specific responses:\n{formatted}\n\n\
         Please provide a comprehensive, well-structured answer that:\n\
         1. Addresses the original question completely\n\
         2. Integrates insights from all relevant domains\n\
         3. Avoids redundancy while maintaining completeness\n\
         4. Provides clear, actionable information\n\
         5. Cites the relevant domains when appropriate\n\n\
         Comprehensive Answer:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str, content: &str) -> RetrievalHit {
        RetrievalHit {
            title: title.to_string(),
            content: content.to_string(),
            source: "test".to_string(),
            domain: BankingDomain::Compliance,
            score: 1.0,
        }
    }

    #[test]
    fn test_every_domain_has_instructions() {
        for domain in BankingDomain::all() {
            let text = expert_instructions(*domain);
            assert!(text.contains("expert in banking"));
        }
    }

    #[test]
    fn test_context_joins_hits_with_blank_line() {
        let hits = vec![hit("A", "first"), hit("B", "second")];
        let context = build_context(&hits);
        assert_eq!(context, "Source: A\nfirst\n\nSource: B\nsecond");
    }

    #[test]
    fn test_expert_prompt_interpolation() {
        let prompt = build_expert_prompt(
            BankingDomain::GlobalTradeFinance,
            "Source: Handbook\nLC basics",
            "What is an LC?",
        );

        assert!(prompt.contains("Global Trade Finance expert"));
        assert!(prompt.contains("Context: Source: Handbook"));
        assert!(prompt.contains("Question: What is an LC?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_synthesis_prompt_labels_domains() {
        let answers = vec![
            (BankingDomain::Compliance, "KYC applies.".to_string()),
            (BankingDomain::RiskManagement, "Assess exposure.".to_string()),
        ];

        let prompt = build_synthesis_prompt(&answers, "How do I onboard a client?");
        assert!(prompt.contains("Domain: Compliance\nResponse: KYC applies."));
        assert!(prompt.contains("Domain: Risk Management\nResponse: Assess exposure."));
        assert!(prompt.contains("Original Question: How do I onboard a client?"));
    }
}
