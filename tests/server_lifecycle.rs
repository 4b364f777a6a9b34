mod common;

use common::{create_test_backend, open_document};
use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::*;

#[tokio::test]
async fn test_initialize_server_info() {
    let backend = create_test_backend();
    let params = InitializeParams::default();
    let result = backend.initialize(params).await.unwrap();

    let server_info = result.server_info.expect("server_info should be present");
    assert_eq!(server_info.name, "WebkulLSP");
    assert_eq!(
        server_info.version,
        Some(env!("CARGO_PKG_VERSION").to_string())
    );
}

#[tokio::test]
async fn test_initialize_capabilities() {
    let backend = create_test_backend();
    let params = InitializeParams::default();
    let result = backend.initialize(params).await.unwrap();

    let caps = result.capabilities;
    assert!(
        caps.completion_provider.is_some(),
        "Completion provider should be enabled"
    );
    assert_eq!(
        caps.text_document_sync,
        Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL))
    );

    let commands = caps
        .execute_command_provider
        .expect("execute command provider")
        .commands;
    assert_eq!(
        commands,
        vec![
            "extension.generateClassTemplate".to_string(),
            "extension.createModule".to_string()
        ]
    );
}

#[tokio::test]
async fn test_initialize_takes_workspace_folders() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let backend = create_test_backend();

    let params = InitializeParams {
        workspace_folders: Some(vec![
            WorkspaceFolder {
                uri: Url::from_file_path(first.path()).unwrap(),
                name: "first".to_string(),
            },
            WorkspaceFolder {
                uri: Url::from_file_path(second.path()).unwrap(),
                name: "second".to_string(),
            },
        ]),
        ..InitializeParams::default()
    };
    backend.initialize(params).await.unwrap();

    assert_eq!(
        backend.workspace_folders(),
        vec![first.path().to_path_buf(), second.path().to_path_buf()]
    );
}

#[tokio::test]
#[allow(deprecated)]
async fn test_initialize_falls_back_to_root_uri() {
    let root = tempfile::tempdir().unwrap();
    let backend = create_test_backend();

    let params = InitializeParams {
        root_uri: Some(Url::from_file_path(root.path()).unwrap()),
        ..InitializeParams::default()
    };
    backend.initialize(params).await.unwrap();

    assert_eq!(backend.workspace_folders(), vec![root.path().to_path_buf()]);
}

#[tokio::test]
async fn test_document_lifecycle() {
    let backend = create_test_backend();
    let uri = Url::parse("file:///test.php").unwrap();

    open_document(&backend, &uri, "<?php\n").await;
    assert_eq!(backend.document_text(uri.as_str()).as_deref(), Some("<?php\n"));

    backend
        .did_change(DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier {
                uri: uri.clone(),
                version: 2,
            },
            content_changes: vec![
                TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: "<?php\n// stale\n".to_string(),
                },
                TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: "<?php\nwkre\n".to_string(),
                },
            ],
        })
        .await;
    assert_eq!(
        backend.document_text(uri.as_str()).as_deref(),
        Some("<?php\nwkre\n")
    );

    backend
        .did_close(DidCloseTextDocumentParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
        })
        .await;
    assert!(backend.document_text(uri.as_str()).is_none());
}

#[tokio::test]
async fn test_change_for_unopened_document_is_ignored() {
    let backend = create_test_backend();
    let uri = Url::parse("file:///never-opened.php").unwrap();

    backend
        .did_change(DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier {
                uri: uri.clone(),
                version: 2,
            },
            content_changes: vec![TextDocumentContentChangeEvent {
                range: None,
                range_length: None,
                text: "<?php".to_string(),
            }],
        })
        .await;
    assert!(backend.document_text(uri.as_str()).is_none());
}

#[tokio::test]
async fn test_workspace_folder_changes() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let backend = webkul_lsp::Backend::new_test_with_workspace(
        vec![a.path().to_path_buf()],
        webkul_lsp::Config::default(),
    );

    let folder = |path: &std::path::Path, name: &str| WorkspaceFolder {
        uri: Url::from_file_path(path).unwrap(),
        name: name.to_string(),
    };

    backend
        .did_change_workspace_folders(DidChangeWorkspaceFoldersParams {
            event: WorkspaceFoldersChangeEvent {
                added: vec![folder(b.path(), "b"), folder(a.path(), "a")],
                removed: vec![],
            },
        })
        .await;
    assert_eq!(
        backend.workspace_folders(),
        vec![a.path().to_path_buf(), b.path().to_path_buf()]
    );

    backend
        .did_change_workspace_folders(DidChangeWorkspaceFoldersParams {
            event: WorkspaceFoldersChangeEvent {
                added: vec![],
                removed: vec![folder(a.path(), "a")],
            },
        })
        .await;
    assert_eq!(backend.workspace_folders(), vec![b.path().to_path_buf()]);
}

#[tokio::test]
async fn test_completion_returns_none_when_nothing_matches() {
    let backend = create_test_backend();
    let uri = Url::parse("file:///test.php").unwrap();
    open_document(&backend, &uri, "<?php\n$x = 1;\n").await;

    let result = backend
        .completion(CompletionParams {
            text_document_position: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri },
                position: Position {
                    line: 1,
                    character: 2,
                },
            },
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
            context: None,
        })
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_shutdown() {
    let backend = create_test_backend();
    assert!(backend.shutdown().await.is_ok());
}
