//! Token authentication artifacts, rendered once per project.

use crate::domain::ArtifactKind;

use super::{Location, ProjectFile, RenderContext, code::fill};

const JWT_TOKEN_SERVICE: &str = r#"package {{PACKAGE}}.security;

import io.jsonwebtoken.Claims;
import io.jsonwebtoken.JwtException;
import io.jsonwebtoken.Jwts;
import io.jsonwebtoken.security.Keys;
import org.springframework.beans.factory.annotation.Value;
import org.springframework.stereotype.Service;

import java.nio.charset.StandardCharsets;
import java.security.Key;
import java.util.Date;
import java.util.Optional;

/** Issues and validates signed bearer tokens. */
@Service
public class JwtTokenService {

    private final Key key;
    private final long expirationMs;

    public JwtTokenService(@Value("${jwt.secret}") String secret,
                           @Value("${jwt.expiration}") long expirationMs) {
        this.key = Keys.hmacShaKeyFor(secret.getBytes(StandardCharsets.UTF_8));
        this.expirationMs = expirationMs;
    }

    public String issue(String subject, Role role) {
        Date now = new Date();
        return Jwts.builder()
                .setSubject(subject)
                .claim("role", role.name())
                .setIssuedAt(now)
                .setExpiration(new Date(now.getTime() + expirationMs))
                .signWith(key)
                .compact();
    }

    public Optional<UserPrincipal> validate(String token) {
        try {
            Claims claims = Jwts.parserBuilder()
                    .setSigningKey(key)
                    .build()
                    .parseClaimsJws(token)
                    .getBody();
            String role = claims.get("role", String.class);
            return Optional.of(new UserPrincipal(
                    claims.getSubject(),
                    role == null ? Role.USER : Role.valueOf(role)));
        } catch (JwtException | IllegalArgumentException e) {
            return Optional.empty();
        }
    }
}
"#;

const JWT_AUTHENTICATION_FILTER: &str = r#"package {{PACKAGE}}.security;

import {{EE}}.servlet.FilterChain;
import {{EE}}.servlet.ServletException;
import {{EE}}.servlet.http.HttpServletRequest;
import {{EE}}.servlet.http.HttpServletResponse;
import org.springframework.security.authentication.UsernamePasswordAuthenticationToken;
import org.springframework.security.core.context.SecurityContextHolder;
import org.springframework.stereotype.Component;
import org.springframework.web.filter.OncePerRequestFilter;

import java.io.IOException;

@Component
public class JwtAuthenticationFilter extends OncePerRequestFilter {

    private static final String BEARER = "Bearer ";

    private final JwtTokenService tokenService;

    public JwtAuthenticationFilter(JwtTokenService tokenService) {
        this.tokenService = tokenService;
    }

    @Override
    protected void doFilterInternal(HttpServletRequest request,
                                    HttpServletResponse response,
                                    FilterChain chain) throws ServletException, IOException {
        String header = request.getHeader("Authorization");
        if (header != null && header.startsWith(BEARER)) {
            tokenService.validate(header.substring(BEARER.length())).ifPresent(principal -> {
                UsernamePasswordAuthenticationToken authentication =
                        new UsernamePasswordAuthenticationToken(principal, null, principal.getAuthorities());
                SecurityContextHolder.getContext().setAuthentication(authentication);
            });
        }
        chain.doFilter(request, response);
    }
}
"#;

const ROLE: &str = r#"package {{PACKAGE}}.security;

public enum Role {
    USER,
    ADMIN
}
"#;

const USER_PRINCIPAL: &str = r#"package {{PACKAGE}}.security;

import org.springframework.security.core.GrantedAuthority;
import org.springframework.security.core.authority.SimpleGrantedAuthority;

import java.util.Collection;
import java.util.Collections;

/** The authenticated caller, as carried by a validated token. */
public class UserPrincipal {

    private final String username;
    private final Role role;

    public UserPrincipal(String username, Role role) {
        this.username = username;
        this.role = role;
    }

    public String getUsername() {
        return username;
    }

    public Role getRole() {
        return role;
    }

    public Collection<? extends GrantedAuthority> getAuthorities() {
        return Collections.singletonList(new SimpleGrantedAuthority("ROLE_" + role.name()));
    }
}
"#;

fn security_config(ctx: &RenderContext<'_>) -> String {
    let h2 = ctx.profile_id() == Some("h2");
    let mut imports = vec![
        format!("import {}.security.JwtAuthenticationFilter;", ctx.package()),
        "import org.springframework.context.annotation.Bean;".to_string(),
        "import org.springframework.context.annotation.Configuration;".to_string(),
        "import org.springframework.http.HttpMethod;".to_string(),
        "import org.springframework.security.config.annotation.web.builders.HttpSecurity;".to_string(),
        "import org.springframework.security.config.annotation.web.configuration.EnableWebSecurity;"
            .to_string(),
        "import org.springframework.security.config.http.SessionCreationPolicy;".to_string(),
        "import org.springframework.security.crypto.bcrypt.BCryptPasswordEncoder;".to_string(),
        "import org.springframework.security.crypto.password.PasswordEncoder;".to_string(),
        "import org.springframework.security.web.SecurityFilterChain;".to_string(),
        "import org.springframework.security.web.authentication.UsernamePasswordAuthenticationFilter;"
            .to_string(),
    ];
    if h2 {
        imports.push(
            "import org.springframework.boot.autoconfigure.security.servlet.PathRequest;".to_string(),
        );
    }
    imports.sort();

    let chain = if ctx.jakarta {
        // Sign-up is the only route reachable without a token.
        let mut rules = vec![
            "                .requestMatchers(HttpMethod.POST, \"/api/users\").permitAll()".to_string(),
        ];
        if h2 {
            rules.push("                .requestMatchers(PathRequest.toH2Console()).permitAll()".to_string());
        }
        rules.push("                .anyRequest().authenticated())".to_string());

        let mut lines = vec![
            "        http".to_string(),
            "            .csrf(csrf -> csrf.disable())".to_string(),
            "            .sessionManagement(session -> session.sessionCreationPolicy(SessionCreationPolicy.STATELESS))"
                .to_string(),
            "            .authorizeHttpRequests(auth -> auth".to_string(),
        ];
        lines.extend(rules);
        if h2 {
            lines.push(
                "            .headers(headers -> headers.frameOptions(frame -> frame.sameOrigin()))"
                    .to_string(),
            );
        }
        lines.push(
            "            .addFilterBefore(jwtAuthenticationFilter, UsernamePasswordAuthenticationFilter.class);"
                .to_string(),
        );
        lines.join("\n")
    } else {
        let mut lines = vec![
            "        http".to_string(),
            "            .csrf().disable()".to_string(),
            "            .sessionManagement().sessionCreationPolicy(SessionCreationPolicy.STATELESS)".to_string(),
            "            .and()".to_string(),
            "            .authorizeRequests()".to_string(),
            "            .antMatchers(HttpMethod.POST, \"/api/users\").permitAll()".to_string(),
        ];
        if h2 {
            lines.push("            .requestMatchers(PathRequest.toH2Console()).permitAll()".to_string());
        }
        lines.push("            .anyRequest().authenticated()".to_string());
        lines.push("            .and()".to_string());
        if h2 {
            lines.push("            .headers().frameOptions().sameOrigin()".to_string());
            lines.push("            .and()".to_string());
        }
        lines.push(
            "            .addFilterBefore(jwtAuthenticationFilter, UsernamePasswordAuthenticationFilter.class);"
                .to_string(),
        );
        lines.join("\n")
    };

    format!(
        r#"package {package}.config;

{imports}

@Configuration
@EnableWebSecurity
public class SecurityConfig {{

    private final JwtAuthenticationFilter jwtAuthenticationFilter;

    public SecurityConfig(JwtAuthenticationFilter jwtAuthenticationFilter) {{
        this.jwtAuthenticationFilter = jwtAuthenticationFilter;
    }}

    @Bean
    public SecurityFilterChain securityFilterChain(HttpSecurity http) throws Exception {{
{chain}
        return http.build();
    }}

    @Bean
    public PasswordEncoder passwordEncoder() {{
        return new BCryptPasswordEncoder();
    }}
}}
"#,
        package = ctx.package(),
        imports = imports.join("\n"),
    )
}

pub(super) fn render(ctx: &RenderContext<'_>) -> Vec<ProjectFile> {
    let vars = [("PACKAGE", ctx.package()), ("EE", ctx.ee())];
    let file = |path: &str, content: String| {
        ProjectFile::new(Location::Source(path.to_string()), ArtifactKind::Security, content)
    };
    vec![
        file("config/SecurityConfig.java", security_config(ctx)),
        file("security/JwtTokenService.java", fill(JWT_TOKEN_SERVICE, &vars)),
        file(
            "security/JwtAuthenticationFilter.java",
            fill(JWT_AUTHENTICATION_FILTER, &vars),
        ),
        file("security/Role.java", fill(ROLE, &vars)),
        file("security/UserPrincipal.java", fill(USER_PRINCIPAL, &vars)),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::renderer::tests::{h2, mongo, shop, spec};

    fn config(jakarta: bool, h2_profile: bool) -> String {
        let spec = spec();
        let project = shop();
        let profile = if h2_profile { h2() } else { mongo() };
        let ctx = RenderContext::new(&spec, &project, Some(&profile), jakarta);
        render(&ctx).remove(0).content
    }

    #[test]
    fn boot_3_uses_lambda_dsl() {
        let source = config(true, true);
        assert!(source.contains(".authorizeHttpRequests(auth -> auth"));
        assert!(source.contains(".requestMatchers(PathRequest.toH2Console()).permitAll()"));
        assert!(source.contains("frame.sameOrigin()"));
        assert!(source.contains("addFilterBefore(jwtAuthenticationFilter, UsernamePasswordAuthenticationFilter.class);"));
    }

    #[test]
    fn boot_2_uses_ant_matchers() {
        let source = config(false, false);
        assert!(source.contains(".authorizeRequests()"));
        assert!(source.contains(".antMatchers(HttpMethod.POST, \"/api/users\").permitAll()"));
        assert!(!source.contains("PathRequest"));
    }

    #[test]
    fn only_served_routes_are_public() {
        for (jakarta, h2_profile) in [(true, true), (false, false)] {
            let source = config(jakarta, h2_profile);
            assert_eq!(source.matches(".permitAll()").count(), 1 + usize::from(h2_profile));
            assert!(!source.contains("/api/auth"));
        }
    }

    #[test]
    fn filter_uses_the_servlet_namespace() {
        let spec = spec();
        let project = shop();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), false);
        let files = render(&ctx);
        let filter = &files[2].content;
        assert!(filter.starts_with("package com.acme.shopapi.security;"));
        assert!(filter.contains("import javax.servlet.FilterChain;"));
        assert!(!files.iter().any(|f| f.content.contains("{{")));
    }
}
