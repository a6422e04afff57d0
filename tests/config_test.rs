// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证分配队列配置读取与校验
// ==========================================


mod helpers;

use helpers::mock_config::MockConfig;
use rusqlite::Connection;
use test_helpers::{create_test_db, insert_test_config};
use tsp_award_queue::config::{
    config_keys, AwardQueueConfig, AwardQueueConfigReader, ConfigError, ConfigManager,
};

#[tokio::test]
async fn test_config_manager_creation() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let config_manager = ConfigManager::new(&db_path);
    assert!(
        config_manager.is_ok(),
        "ConfigManager should be created successfully"
    );
}

#[tokio::test]
async fn test_defaults_when_keys_absent() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let config_manager = ConfigManager::new(&db_path).unwrap();

    assert_eq!(config_manager.get_minimum_performance_score().await.unwrap(), 10.0);
    assert_eq!(config_manager.get_awards_per_band().await.unwrap(), [5, 3, 2, 1]);
}

#[tokio::test]
async fn test_values_read_from_config_kv() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    {
        let conn = Connection::open(&db_path).unwrap();
        insert_test_config(&conn, config_keys::MINIMUM_PERFORMANCE_SCORE, "12.5").unwrap();
        insert_test_config(&conn, config_keys::AWARDS_PER_BAND, "[4,3,2,1]").unwrap();
    }

    let config_manager = ConfigManager::new(&db_path).unwrap();
    let config = AwardQueueConfig::load(&config_manager).await.unwrap();

    assert_eq!(config.minimum_performance_score, 12.5);
    assert_eq!(config.awards_per_band, [4, 3, 2, 1]);
}

#[tokio::test]
async fn test_zero_weight_rejected() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    {
        let conn = Connection::open(&db_path).unwrap();
        insert_test_config(&conn, config_keys::AWARDS_PER_BAND, "[5,3,0,1]").unwrap();
    }

    let config_manager = ConfigManager::new(&db_path).unwrap();
    let result = AwardQueueConfig::load(&config_manager).await;

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[tokio::test]
async fn test_non_numeric_mps_rejected() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    {
        let conn = Connection::open(&db_path).unwrap();
        insert_test_config(&conn, config_keys::MINIMUM_PERFORMANCE_SCORE, "ten").unwrap();
    }

    let config_manager = ConfigManager::new(&db_path).unwrap();
    assert!(config_manager.get_minimum_performance_score().await.is_err());
}

#[tokio::test]
async fn test_load_from_mock_reader() {
    let reader = MockConfig::default().with_mps(0.0).with_awards_per_band([1, 1, 1, 1]);
    let config = AwardQueueConfig::load(&reader).await.unwrap();

    assert_eq!(config.minimum_performance_score, 0.0);
    assert_eq!(config.awards_per_band, [1, 1, 1, 1]);

    let infinite = MockConfig::default().with_mps(f64::INFINITY);
    assert!(AwardQueueConfig::load(&infinite).await.is_err());
}
