//! Helper classes: in-memory id sequence, mail and file storage.

use crate::domain::ArtifactKind;

use super::{Location, ProjectFile, RenderContext, code::fill};

const ID_SEQUENCE: &str = r#"package {{PACKAGE}}.support;

import java.util.concurrent.atomic.AtomicLong;

/** Monotonic id source for in-memory services. Safe for concurrent use. */
public final class IdSequence {

    private final AtomicLong next = new AtomicLong(1);

    public long next() {
        return next.getAndIncrement();
    }
}
"#;

const NOTIFICATION_SERVICE: &str = r#"package {{PACKAGE}}.notification;

import org.springframework.beans.factory.annotation.Value;
import org.springframework.mail.SimpleMailMessage;
import org.springframework.mail.javamail.JavaMailSender;
import org.springframework.stereotype.Service;

@Service
public class NotificationService {

    private final JavaMailSender mailSender;
    private final String from;

    public NotificationService(JavaMailSender mailSender,
                               @Value("${notification.from:noreply@example.com}") String from) {
        this.mailSender = mailSender;
        this.from = from;
    }

    public void sendEmail(String to, String subject, String body) {
        SimpleMailMessage message = new SimpleMailMessage();
        message.setFrom(from);
        message.setTo(to);
        message.setSubject(subject);
        message.setText(body);
        mailSender.send(message);
    }
}
"#;

const FILE_STORAGE_SERVICE: &str = r#"package {{PACKAGE}}.storage;

import org.springframework.beans.factory.annotation.Value;
import org.springframework.stereotype.Service;
import org.springframework.util.StringUtils;
import org.springframework.web.multipart.MultipartFile;

import java.io.IOException;
import java.io.InputStream;
import java.io.UncheckedIOException;
import java.nio.file.Files;
import java.nio.file.Path;
import java.nio.file.Paths;
import java.nio.file.StandardCopyOption;
import java.util.UUID;

/** Stores uploads under {@code file.upload-dir}. */
@Service
public class FileStorageService {

    private final Path root;

    public FileStorageService(@Value("${file.upload-dir}") String uploadDir) {
        this.root = Paths.get(uploadDir).toAbsolutePath().normalize();
        try {
            Files.createDirectories(root);
        } catch (IOException e) {
            throw new UncheckedIOException("Could not create upload directory " + root, e);
        }
    }

    public String store(MultipartFile file) {
        String name = file.getOriginalFilename() == null ? "file" : file.getOriginalFilename();
        String original = StringUtils.cleanPath(name);
        if (original.contains("..")) {
            throw new IllegalArgumentException("Invalid file name: " + original);
        }
        String stored = UUID.randomUUID() + "-" + original;
        try (InputStream in = file.getInputStream()) {
            Files.copy(in, resolve(stored), StandardCopyOption.REPLACE_EXISTING);
        } catch (IOException e) {
            throw new UncheckedIOException("Could not store " + original, e);
        }
        return stored;
    }

    public Path load(String filename) {
        return resolve(filename);
    }

    public boolean delete(String filename) {
        try {
            return Files.deleteIfExists(resolve(filename));
        } catch (IOException e) {
            throw new UncheckedIOException("Could not delete " + filename, e);
        }
    }

    private Path resolve(String filename) {
        Path path = root.resolve(filename).normalize();
        if (!path.startsWith(root)) {
            throw new IllegalArgumentException("Invalid file name: " + filename);
        }
        return path;
    }
}
"#;

fn source(ctx: &RenderContext<'_>, path: &str, kind: ArtifactKind, template: &str) -> ProjectFile {
    ProjectFile::new(
        Location::Source(path.to_string()),
        kind,
        fill(template, &[("PACKAGE", ctx.package())]),
    )
}

pub(super) fn id_sequence(ctx: &RenderContext<'_>) -> ProjectFile {
    source(ctx, "support/IdSequence.java", ArtifactKind::Support, ID_SEQUENCE)
}

pub(super) fn notification_service(ctx: &RenderContext<'_>) -> ProjectFile {
    source(
        ctx,
        "notification/NotificationService.java",
        ArtifactKind::Integration,
        NOTIFICATION_SERVICE,
    )
}

pub(super) fn file_storage_service(ctx: &RenderContext<'_>) -> ProjectFile {
    source(
        ctx,
        "storage/FileStorageService.java",
        ArtifactKind::Integration,
        FILE_STORAGE_SERVICE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::renderer::tests::{files_only, spec};

    #[test]
    fn helpers_land_in_their_packages() {
        let spec = spec();
        let project = files_only();
        let ctx = RenderContext::new(&spec, &project, None, true);
        assert!(id_sequence(&ctx).content.starts_with("package com.acme.shopapi.support;"));
        let storage = file_storage_service(&ctx);
        assert_eq!(storage.kind, ArtifactKind::Integration);
        assert!(storage.content.starts_with("package com.acme.shopapi.storage;"));
        assert!(storage.content.contains("original.contains(\"..\")"));
    }
}
