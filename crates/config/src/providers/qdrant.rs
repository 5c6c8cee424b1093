//! Qdrant endpoints and collection lookups.

use super::{PurposeKey, lookup};
use crate::types::{QdrantCollections, QdrantConfig};

/// Collection purpose. Unknown keys select `Documents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionPurpose {
    Documents,
    Products,
    Conversations,
    KnowledgeBase,
}

impl PurposeKey for CollectionPurpose {
    const KIND: &'static str = "qdrant_collection";

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "documents" => Some(Self::Documents),
            "products" => Some(Self::Products),
            "conversations" => Some(Self::Conversations),
            "knowledge" | "knowledge_base" => Some(Self::KnowledgeBase),
            _ => None,
        }
    }
}

impl QdrantCollections {
    pub fn get(&self, purpose: CollectionPurpose) -> &str {
        match purpose {
            CollectionPurpose::Documents => &self.documents,
            CollectionPurpose::Products => &self.products,
            CollectionPurpose::Conversations => &self.conversations,
            CollectionPurpose::KnowledgeBase => &self.knowledge_base,
        }
    }

    pub fn collection_name(&self, purpose: &str) -> &str {
        self.get(lookup(purpose).unwrap_or(CollectionPurpose::Documents))
    }
}

impl QdrantConfig {
    /// HTTP API base URL; `https` when `ssl` is set.
    pub fn http_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.http_port)
    }

    pub fn grpc_address(&self) -> String {
        format!("{}:{}", self.host, self.grpc_port)
    }

    pub fn collection_name(&self, purpose: &str) -> &str {
        self.collections.collection_name(purpose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QdrantConfig {
        QdrantConfig {
            host: "qdrant.local".to_string(),
            http_port: 6333,
            grpc_port: 6334,
            collections: QdrantCollections {
                documents: "docs".to_string(),
                products: "products".to_string(),
                conversations: "chats".to_string(),
                knowledge_base: "kb".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_endpoints() {
        let mut qdrant = sample();
        assert_eq!(qdrant.http_url(), "http://qdrant.local:6333");
        assert_eq!(qdrant.grpc_address(), "qdrant.local:6334");

        qdrant.ssl = true;
        assert_eq!(qdrant.http_url(), "https://qdrant.local:6333");
    }

    #[test]
    fn test_collection_lookup() {
        let qdrant = sample();
        assert_eq!(qdrant.collection_name("knowledge"), "kb");
        assert_eq!(qdrant.collection_name("knowledge_base"), "kb");
        assert_eq!(qdrant.collection_name("conversations"), "chats");
    }

    #[test]
    fn test_unknown_collection_falls_back_to_documents() {
        let qdrant = sample();
        assert_eq!(
            qdrant.collection_name("images"),
            qdrant.collection_name("documents")
        );
    }
}
