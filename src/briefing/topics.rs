//! Seed-vocabulary topic detection.

use crate::core::Article;

/// Fixed topic vocabulary, in detection order.
pub const SEED_TOPICS: [&str; 10] = [
    "juros",
    "logística",
    "saúde",
    "tecnologia",
    "energia",
    "inflação",
    "câmbio",
    "commodities",
    "resultado",
    "regulação",
];

/// Effective topic set for an article: pre-existing topics first (order
/// preserved), then seeds found in the lower-cased title+content and not
/// already present, in vocabulary order. The article itself is not touched.
pub fn effective_topics(article: &Article) -> Vec<String> {
    let mut topics = article.topics.clone();
    let text = format!("{} {}", article.title, article.content).to_lowercase();
    for seed in SEED_TOPICS {
        if text.contains(seed) && !topics.iter().any(|t| t == seed) {
            topics.push(seed.to_string());
        }
    }
    topics
}

/// Canned impact sentence for a topic. Topics outside the seed vocabulary
/// get the generic fallback.
pub(crate) fn impact_for(topic: &str) -> &'static str {
    match topic {
        "juros" => "Queda de juros tende a favorecer consumo, varejo e construção; alta encarece crédito.",
        "logística" => "Restrição logística pode elevar custos e prazos, pressionando margens.",
        "saúde" => "Temas de saúde afetam consumo, seguros e comportamento do trabalho.",
        "tecnologia" => "Adoção tecnológica impacta produtividade e competição setorial.",
        "energia" => "Volatilidade de energia mexe com custos industriais e inflação.",
        "inflação" => "Inflação altera juros e poder de compra, com efeito amplo no mercado.",
        "câmbio" => "Oscilação cambial afeta exportadoras/importadoras e inflação de tradables.",
        "commodities" => "Preços de commodities movem setores exportadores e cadeia agrícola/mineral.",
        "resultado" => "Safra de resultados aumenta volatilidade com revisões de guidance.",
        "regulação" => "Mudanças regulatórias trazem risco e oportunidades setoriais.",
        _ => "Impacto varia por setor; monitorar próximos desdobramentos.",
    }
}
