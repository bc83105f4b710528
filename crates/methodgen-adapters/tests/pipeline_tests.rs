//! End-to-end generation through the real adapters.

use std::fs;
use std::path::Path;

use methodgen_adapters::{FileBufferEditor, LocalFilesystem, MemoryFilesystem};
use methodgen_core::{
    application::{ApplicationError, MethodService},
    domain::{CursorPosition, EditorContext, GeneratorSettings},
    error::MethodgenError,
};

fn memory_service(fs: &MemoryFilesystem, settings: GeneratorSettings) -> MethodService {
    MethodService::new(
        settings,
        Box::new(fs.clone()),
        Box::new(FileBufferEditor::new(fs.clone())),
    )
}

#[test]
fn full_pipeline_in_memory() {
    let fs = MemoryFilesystem::new()
        .with_file(
            "/home/me/template/endpoint.go.tmpl",
            "func make[[METHODNAME]]Endpoint(s Service) endpoint.Endpoint {\n\
             \treturn func(ctx context.Context) [[NAMEDRETURN]] {\n\
             \t\treturn s.[[METHODNAME]]([[PARAMETERS]])\n\
             \t}\n}\n",
        )
        .with_file(
            "/home/me/template/logging.go.tmpl",
            "func (mw loggingMiddleware) [[METHODSIGNATUREWITHOUTRETURN]] [[NAMEDRETURN]] {\n\
             \tmw.logger.Log(\"id\", [[LOGGINGID]])\n\
             \treturn mw.next.[[METHODNAME]]([[PARAMETERS]])\n}\n",
        )
        .with_file("/home/me/template/method.tmpl", "func (s *service) [[REPLACE]] {\n}\n")
        .with_file("/src/svc/service.go", "package svc\n\ntype Service interface {\n\n}\n")
        .with_file("/src/svc/endpoint.go", "package svc")
        .with_file("/src/svc/logging.go", "package svc");

    let settings = GeneratorSettings::new("/home/me", "template")
        .with_template_names("endpoint.go, logging.go")
        .with_method_template("method.tmpl");
    let service = memory_service(&fs, settings);
    let editor = EditorContext::new("/src/svc/service.go", CursorPosition::new(3, 1));

    let tokens = service
        .generate(&editor, "GetUser(id string, verbose bool) (*User, error) `json:\"user\"`")
        .unwrap();
    assert_eq!(tokens.len(), 2);

    assert_eq!(
        fs.read_file(Path::new("/src/svc/service.go")).unwrap(),
        "package svc\n\ntype Service interface {\n\
         GetUser(id string, verbose bool) (*User, error) `json:\"user\"`\n}\n\
         func (s *service) GetUser(id string, verbose bool) (*User, error)  {\n}\n"
    );
    assert_eq!(
        fs.read_file(Path::new("/src/svc/endpoint.go")).unwrap(),
        "package svc\n\
         func makeGetUserEndpoint(s Service) endpoint.Endpoint {\n\
         \treturn func(ctx context.Context) (u *User, e error) {\n\
         \t\treturn s.GetUser(id, verbose)\n\
         \t}\n}\n"
    );
    assert_eq!(
        fs.read_file(Path::new("/src/svc/logging.go")).unwrap(),
        "package svc\n\
         func (mw loggingMiddleware) GetUser(id string, verbose bool) (u *User, e error) {\n\
         \tmw.logger.Log(\"id\", id)\n\
         \treturn mw.next.GetUser(id, verbose)\n}\n"
    );
}

#[test]
fn failure_in_one_target_surfaces() {
    let fs = MemoryFilesystem::new()
        .with_file("/t/template/a.go.tmpl", "[[METHODNAME]]")
        .with_file("/t/template/b.go.tmpl", "[[METHODNAME]]")
        .with_file("/src/a.go", "");
    let service = memory_service(
        &fs,
        GeneratorSettings::new("/t", "template").with_template_names("a.go,b.go"),
    );

    let err = service
        .create_methods(&EditorContext::new("/src/main.go", CursorPosition::default()), "Foo()")
        .unwrap_err();

    assert!(matches!(
        err,
        MethodgenError::Application(ApplicationError::FileError { .. })
    ));
}

#[test]
fn full_pipeline_on_disk() {
    let root = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("template")).unwrap();
    fs::write(
        root.path().join("template/handler.go.tmpl"),
        "func [[METHODSIGNATURE]] { log([[LOGGINGID]]) }",
    )
    .unwrap();
    fs::write(work.path().join("main.go"), "package main\n").unwrap();
    fs::write(work.path().join("handler.go"), "package main").unwrap();

    let service = MethodService::new(
        GeneratorSettings::new(root.path(), "template").with_template_names("handler.go"),
        Box::new(LocalFilesystem::new()),
        Box::new(FileBufferEditor::new(LocalFilesystem::new())),
    );
    let editor = EditorContext::new(work.path().join("main.go"), CursorPosition::new(1, 0));

    service.generate(&editor, "Ping()").unwrap();

    assert_eq!(
        fs::read_to_string(work.path().join("handler.go")).unwrap(),
        "package main\nfunc Ping() { log(\"undefined\") }"
    );
    assert_eq!(
        fs::read_to_string(work.path().join("main.go")).unwrap(),
        "package main\nPing()"
    );
}
