//! Integration tests for archsim
//!
//! End-to-end tests that load diagram documents and run them through the engine.
//!
mod common;
use archsim::diagram::{EcsConfig, GeoShare};
use archsim::prelude::*;
use common::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_diagram_document_end_to_end() {
        let diagram = Diagram::from_json(TYPICAL_DIAGRAM_JSON).expect("Failed to parse diagram");
        diagram.check().expect("Diagram should be in range");

        assert_eq!(diagram.nodes.len(), 4);
        assert_eq!(diagram.edges.len(), 3);
        assert_eq!(diagram.traffic.requests_per_second, 250.0);
        assert!(diagram.traffic.geo_distribution.is_empty());

        let lb = &diagram.nodes[1];
        assert_eq!(lb.config.name, "Public ALB");
        assert_eq!(lb.config.latency.base, 5.0);

        let app = &diagram.nodes[2];
        assert_eq!(app.parent_id.as_deref(), Some("private-a"));
        match &app.config.specific {
            SpecificConfig::Ecs(ecs) => {
                assert_eq!(ecs.task_count, 4);
                assert_eq!(ecs.cpu, 0.5);
                assert_eq!(ecs.auto_scaling, EcsConfig::default().auto_scaling);
            }
            other => panic!("expected ECS parameters, got {:?}", other),
        }

        let result = Simulator::builder()
            .advanced_mode(true)
            .build()
            .run_diagram(&diagram);

        assert!(result.validation.is_valid, "{:?}", result.validation.issues);
        assert_eq!(result.validation.warning_count, 0);
        assert_eq!(result.performance.total_latency, 3.0 + 5.0 + 50.0 + 3.0);
        assert!(result.advanced.is_some());

        let report = ReportFormatter::format_result(&result);
        assert!(report.contains("Performance"));
        assert!(report.contains("Public ALB"));
        assert!(report.contains("Scalability"));

        println!("{}", report);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("archsim_integration_diagram.json");
        fs::write(&path, TYPICAL_DIAGRAM_JSON).expect("Failed to write temp diagram");

        let diagram = Diagram::from_file(path.to_str().unwrap()).expect("Failed to load diagram");
        assert_eq!(diagram.nodes.len(), 4);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Diagram::from_file("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DiagramError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }

    #[test]
    fn test_out_of_range_file_is_rejected_on_load() {
        let path = std::env::temp_dir().join("archsim_integration_out_of_range.json");
        let json = r#"{
            "nodes": [{ "id": "cdn", "serviceType": "cloudfront",
                        "config": { "cache": { "enabled": true, "ttl": 60, "hitRate": 3 } } }],
            "edges": []
        }"#;
        fs::write(&path, json).expect("Failed to write temp diagram");

        let err = Diagram::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            DiagramError::Config(ConfigError::InvalidNodeField { field: "cache.hitRate", .. })
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_json() {
        let err = Diagram::from_json("{ \"nodes\": [ ").unwrap_err();
        assert!(matches!(err, DiagramError::JsonParseError(_)));
    }

    #[test]
    fn test_unknown_service_type() {
        let json = r#"{ "nodes": [{ "id": "x", "serviceType": "mainframe" }] }"#;
        let err = Diagram::from_json(json).unwrap_err();
        assert!(matches!(err, DiagramError::JsonParseError(_)));
        assert!(err.to_string().contains("mainframe"));
    }

    #[test]
    fn test_legacy_type_key_is_accepted() {
        let json = r#"{ "nodes": [{ "id": "q", "type": "sqs" }] }"#;
        let diagram = Diagram::from_json(json).expect("Failed to parse diagram");
        assert_eq!(diagram.nodes[0].service_type, ServiceType::Sqs);
        assert_eq!(diagram.traffic, TrafficProfile::default());
    }
}

#[cfg(test)]
mod range_checks {
    use super::*;

    #[test]
    fn test_traffic_bounds() {
        let mut profile = traffic(-1.0);
        assert!(matches!(
            profile.check(),
            Err(ConfigError::TrafficOutOfRange { field: "requestsPerSecond", .. })
        ));

        profile.requests_per_second = 1_000_000.0;
        assert!(profile.check().is_ok());

        profile.read_write_ratio = 1.5;
        assert!(matches!(
            profile.check(),
            Err(ConfigError::TrafficOutOfRange { field: "readWriteRatio", .. })
        ));
    }

    #[test]
    fn test_geo_distribution_entries() {
        let mut profile = traffic(10.0);
        profile.geo_distribution.push(GeoShare {
            region: String::new(),
            percentage: 10.0,
        });
        assert_eq!(
            profile.check(),
            Err(ConfigError::InvalidGeoShare {
                index: 1,
                message: "region must not be empty".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_node_ids() {
        let diagram = Diagram {
            nodes: vec![node("a", ServiceType::Ec2), node("a", ServiceType::Rds)],
            edges: Vec::new(),
            traffic: TrafficProfile::default(),
        };
        assert_eq!(diagram.check(), Err(ConfigError::DuplicateNodeId("a".to_string())));
    }

    #[test]
    fn test_config_of_another_type_is_rejected() {
        let diagram = Diagram {
            nodes: vec![node("db", ServiceType::Rds)
                .with_config(ServiceConfig::default_for(ServiceType::Ec2))],
            edges: Vec::new(),
            traffic: TrafficProfile::default(),
        };
        let err = diagram.check().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MismatchedSpecific {
                service_type: ServiceType::Rds,
                found: ServiceType::Ec2,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Node 'db' is a rds but carries ec2 parameters");

        let matching = ServiceNode::new("db", ServiceType::Rds)
            .with_config(ServiceConfig::default_for(ServiceType::Rds));
        assert!(matching.check().is_ok());
    }

    #[test]
    fn test_negative_latency_names_the_node() {
        let mut bad = node("slow", ServiceType::Lambda);
        bad.config.latency.base = -5.0;
        let err = bad.check().unwrap_err();
        assert!(err.to_string().contains("slow"));
        assert!(err.to_string().contains("latency.base"));
    }
}

#[cfg(test)]
mod custom_formats {
    use super::*;

    /// A minimal editor format: "id:type" boxes and "from>to" arrows.
    struct Sketch {
        boxes: Vec<&'static str>,
        arrows: Vec<&'static str>,
    }

    impl IntoDiagram for Sketch {
        fn into_diagram(self) -> std::result::Result<Diagram, DiagramError> {
            let mut nodes = Vec::new();
            for entry in self.boxes {
                let (id, kind) = entry
                    .split_once(':')
                    .ok_or_else(|| DiagramError::Conversion(format!("bad box '{}'", entry)))?;
                let service_type: ServiceType = kind
                    .parse()
                    .map_err(|e: UnknownServiceType| DiagramError::Conversion(e.to_string()))?;
                nodes.push(ServiceNode::new(id, service_type));
            }

            let mut edges = Vec::new();
            for (i, arrow) in self.arrows.iter().enumerate() {
                let (from, to) = arrow
                    .split_once('>')
                    .ok_or_else(|| DiagramError::Conversion(format!("bad arrow '{}'", arrow)))?;
                edges.push(Edge::new(format!("e{}", i), from, to));
            }

            Ok(Diagram {
                nodes,
                edges,
                traffic: TrafficProfile::default(),
            })
        }
    }

    #[test]
    fn test_custom_format_simulates() {
        let sketch = Sketch {
            boxes: vec!["api:api-gateway", "fn:lambda", "table:dynamodb"],
            arrows: vec!["api>fn", "fn>table"],
        };
        let diagram = sketch.into_diagram().expect("Failed to convert sketch");
        let result = Simulator::builder().build().run_diagram(&diagram);

        assert!(result.validation.is_valid);
        assert_eq!(result.cost.breakdown.len(), 3);
        // API Gateway is the only hop without redundancy.
        assert_eq!(result.availability.single_points_of_failure, vec!["API Gateway".to_string()]);
    }

    #[test]
    fn test_custom_format_conversion_error() {
        let sketch = Sketch {
            boxes: vec!["x:quantum-computer"],
            arrows: Vec::new(),
        };
        let err = sketch.into_diagram().unwrap_err();
        assert!(matches!(err, DiagramError::Conversion(_)));
    }
}
