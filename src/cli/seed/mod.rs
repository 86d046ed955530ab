//! Seed command - loads the bundled sample documents

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{BankingDomain, KnowledgeDocument};
use crate::infrastructure::logging;

/// Ingest the sample documents through the normal ingestion path
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state(&config).await?;

    let documents = sample_documents();
    let total = documents.len();
    let mut added = 0;

    for document in &documents {
        match state.expert_service.add_document(document).await {
            Ok(()) => {
                info!(title = document.title(), "Added sample document");
                added += 1;
            }
            Err(e) => {
                warn!(title = document.title(), error = %e, "Skipped sample document");
            }
        }
    }

    info!(added, total, "Seeding complete");

    Ok(())
}

/// One starter document per banking domain
pub fn sample_documents() -> Vec<KnowledgeDocument> {
    vec![
        KnowledgeDocument::new(
            "Distribution Finance Overview",
            "Distribution Finance is a specialized banking service that provides financing \
             solutions for supply chain and distribution networks.\n\n\
             Key components include:\n\
             - Supply chain financing: Working capital solutions for suppliers and distributors\n\
             - Inventory financing: Credit facilities secured by inventory\n\
             - Trade credit insurance: Protection against non-payment\n\
             - Distribution network financing: Support for channel partners\n\n\
             Benefits:\n\
             - Improved cash flow for all parties in the supply chain\n\
             - Reduced payment delays\n\
             - Enhanced supplier relationships\n\
             - Risk mitigation through insurance products",
            BankingDomain::DistributionFinance,
            "Bank Internal Documentation",
        ),
        KnowledgeDocument::new(
            "Channel Finance Best Practices",
            "Channel Finance enables banks to provide financing to channel partners, dealers, \
             and franchisees.\n\n\
             Key features:\n\
             - Dealer financing programs\n\
             - Franchise financing solutions\n\
             - Channel credit programs\n\
             - Partner relationship management\n\n\
             Risk management considerations:\n\
             - Credit assessment of channel partners\n\
             - Collateral management\n\
             - Monitoring of channel performance\n\
             - Default risk mitigation strategies",
            BankingDomain::ChannelFinance,
            "Channel Finance Manual",
        ),
        KnowledgeDocument::new(
            "Global Trade Finance Fundamentals",
            "Global Trade Finance facilitates international trade through various financial \
             instruments.\n\n\
             Primary instruments:\n\
             - Letters of Credit (LC): Payment guarantees for international transactions\n\
             - Documentary Collections: Trade finance with document control\n\
             - Trade guarantees: Performance and payment guarantees\n\
             - Export/Import financing: Working capital for international trade\n\n\
             Regulatory considerations:\n\
             - International trade regulations\n\
             - Sanctions compliance\n\
             - Anti-money laundering (AML) requirements\n\
             - Know Your Customer (KYC) procedures",
            BankingDomain::GlobalTradeFinance,
            "Global Trade Finance Handbook",
        ),
        KnowledgeDocument::new(
            "Risk Management Framework",
            "Comprehensive risk management is essential for banking operations.\n\n\
             Risk categories:\n\
             - Credit risk: Default risk on loans and advances\n\
             - Market risk: Interest rate, currency, and commodity price risks\n\
             - Operational risk: Internal processes, systems, and external events\n\
             - Liquidity risk: Ability to meet financial obligations\n\n\
             Risk mitigation strategies:\n\
             - Diversification of portfolio\n\
             - Collateral management\n\
             - Stress testing\n\
             - Regular risk assessments",
            BankingDomain::RiskManagement,
            "Risk Management Policy",
        ),
        KnowledgeDocument::new(
            "Banking Compliance Requirements",
            "Banking compliance ensures adherence to regulatory requirements and industry \
             standards.\n\n\
             Key compliance areas:\n\
             - Anti-Money Laundering (AML): Detection and prevention of money laundering\n\
             - Know Your Customer (KYC): Customer identification and verification\n\
             - Basel III: Capital adequacy and liquidity requirements\n\
             - GDPR: Data protection and privacy regulations\n\n\
             Compliance monitoring:\n\
             - Regular audits and assessments\n\
             - Automated monitoring systems\n\
             - Staff training programs\n\
             - Regulatory reporting",
            BankingDomain::Compliance,
            "Compliance Manual",
        ),
        KnowledgeDocument::new(
            "Customer Service Excellence",
            "Exceptional customer service is crucial for banking success.\n\n\
             Service principles:\n\
             - Customer-centric approach\n\
             - Personalized solutions\n\
             - Proactive communication\n\
             - Continuous improvement\n\n\
             Digital transformation:\n\
             - Online banking platforms\n\
             - Mobile applications\n\
             - AI-powered chatbots\n\
             - Omnichannel experience\n\n\
             Service metrics:\n\
             - Customer satisfaction scores\n\
             - Response times\n\
             - Resolution rates\n\
             - Net Promoter Score (NPS)",
            BankingDomain::CustomerService,
            "Customer Service Standards",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sample_document_per_domain() {
        let documents = sample_documents();
        assert_eq!(documents.len(), BankingDomain::all().len());

        for domain in BankingDomain::all() {
            assert!(documents.iter().any(|d| d.domain() == *domain));
        }
    }

    #[test]
    fn test_sample_documents_are_retrievable() {
        for document in sample_documents() {
            assert!(document.is_retrievable());
            assert!(!document.title().is_empty());
            assert!(!document.source().is_empty());
        }
    }
}
