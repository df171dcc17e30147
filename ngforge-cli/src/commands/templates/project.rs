//! Files written by `ngforge init`.

pub fn environment(production: bool) -> String {
    let api_url = if production {
        "https://api.example.com/api"
    } else {
        "http://localhost:3000/api"
    };
    format!(
        r#"export const environment = {{
  production: {production},
  apiUrl: '{api_url}',
}};
"#
    )
}

pub fn core_service() -> &'static str {
    r#"import { Injectable, computed, signal } from '@angular/core';

export interface User {
  id: number;
  name: string;
  email: string;
}

@Injectable({
  providedIn: 'root'
})
export class CoreService {
  private _currentUser = signal<User | null>(null);
  public readonly currentUser = computed(() => this._currentUser());

  private _token = signal<string | null>(null);
  public readonly token = computed(() => this._token());

  public readonly isAuthenticated = computed(() => !!this._token());

  public get getToken(): string | null {
    return this._token();
  }

  constructor() {
    this.loadFromStorage();
  }

  private loadFromStorage(): void {
    const token = localStorage.getItem('auth_token');
    const user = localStorage.getItem('current_user');

    if (token) {
      this._token.set(token);
    }
    if (user) {
      try {
        this._currentUser.set(JSON.parse(user));
      } catch (e) {
        console.error('Could not parse stored user', e);
      }
    }
  }

  setToken(token: string): void {
    this._token.set(token);
    localStorage.setItem('auth_token', token);
  }

  setCurrentUser(user: User): void {
    this._currentUser.set(user);
    localStorage.setItem('current_user', JSON.stringify(user));
  }

  logout(): void {
    this._token.set(null);
    this._currentUser.set(null);
    localStorage.removeItem('auth_token');
    localStorage.removeItem('current_user');
  }

  hasRole(role: string): boolean {
    return false;
  }

  hasPermission(permission: string): boolean {
    return false;
  }
}
"#
}

pub fn api_service() -> &'static str {
    r#"import { inject, Injectable, computed, signal } from '@angular/core';
import { HttpClient, HttpErrorResponse } from '@angular/common/http';
import { Router } from '@angular/router';
import { catchError, finalize, Observable, tap, throwError } from 'rxjs';
import { environment } from '../../../environments/environment';

@Injectable({
  providedIn: 'root'
})
export class ApiService {
  private http = inject(HttpClient);
  private router = inject(Router);

  private readonly apiUrl = environment.apiUrl;
  private readonly debugMode = !environment.production;

  private _backendErrors = signal<Record<string, string[]>>({});
  public readonly backendErrors = computed(() => this._backendErrors());

  private _loading = signal<boolean>(false);
  public readonly loading = computed(() => this._loading());

  clearBackendErrors(): void {
    this._backendErrors.set({});
  }

  clearFieldError(field: string): void {
    const errors = { ...this._backendErrors() };
    delete errors[field];
    this._backendErrors.set(errors);
  }

  get<T>(url: string, options?: object): Observable<T> {
    return this.track('GET', url, this.http.get<T>(this.apiUrl + url, options));
  }

  post<T>(url: string, body: unknown, options?: object): Observable<T> {
    this.clearBackendErrors();
    return this.track('POST', url, this.http.post<T>(this.apiUrl + url, body, options));
  }

  put<T>(url: string, body: unknown, options?: object): Observable<T> {
    this.clearBackendErrors();
    return this.track('PUT', url, this.http.put<T>(this.apiUrl + url, body, options));
  }

  patch<T>(url: string, body: unknown, options?: object): Observable<T> {
    this.clearBackendErrors();
    return this.track('PATCH', url, this.http.patch<T>(this.apiUrl + url, body, options));
  }

  delete<T>(url: string, options?: object): Observable<T> {
    return this.track('DELETE', url, this.http.delete<T>(this.apiUrl + url, options));
  }

  private track<T>(method: string, url: string, request: Observable<T>): Observable<T> {
    this._loading.set(true);
    return request.pipe(
      tap(data => this.debugMode && console.log(`[${method}] ${url}`, data)),
      catchError(error => this.handleError(error, method, url)),
      finalize(() => this._loading.set(false))
    );
  }

  private handleError(error: HttpErrorResponse, method: string, url: string): Observable<never> {
    if (this.debugMode) {
      console.error(`[ERROR ${method}] ${url}`, error);
    }

    switch (error.status) {
      case 0:
        console.error('Server unreachable.');
        break;
      case 401:
        this.router.navigate(['/login']);
        break;
      case 422:
        this._backendErrors.set(error.error?.errors || {});
        break;
      default:
        console.error(error.error?.message || 'Unexpected error.');
    }

    return throwError(() => error);
  }
}
"#
}

/// Class-based guard used by the default modules. `redirect` is where the
/// guard sends a rejected user; `authenticated` is the state it requires.
pub fn session_guard(class_name: &str, authenticated: bool, redirect: &str) -> String {
    let check = if authenticated {
        "!this.coreService.isAuthenticated()"
    } else {
        "this.coreService.isAuthenticated()"
    };
    format!(
        r#"import {{ inject, Injectable }} from '@angular/core';
import {{ CanActivate, Router }} from '@angular/router';
import {{ CoreService }} from '../services/core.service';

@Injectable({{
  providedIn: 'root',
}})
export class {class_name} implements CanActivate {{
  private coreService = inject(CoreService);
  private router = inject(Router);

  canActivate() {{
    if ({check}) {{
      this.router.navigate(['{redirect}']);
      return false;
    }}
    return true;
  }}
}}
"#
    )
}

pub fn http_interceptor() -> &'static str {
    r#"import { HttpHandlerFn, HttpRequest } from '@angular/common/http';
import { inject } from '@angular/core';
import { environment } from '../../../environments/environment';
import { CoreService } from '../services/core.service';

// Adds the bearer token to requests aimed at the API.
export function HttpInterceptor(request: HttpRequest<unknown>, next: HttpHandlerFn) {
  const coreService = inject(CoreService);
  const token = coreService.getToken;

  if (request.url.startsWith(environment.apiUrl) && coreService.isAuthenticated() && token) {
    return next(request.clone({
      setHeaders: {
        Authorization: `Bearer ${token}`,
      },
    }));
  }

  return next(request);
}
"#
}

pub fn app_config() -> &'static str {
    r#"import { ApplicationConfig, provideZoneChangeDetection } from '@angular/core';
import { provideRouter } from '@angular/router';
import { provideHttpClient, withInterceptors } from '@angular/common/http';

import { routes } from './app.routes';
import { HttpInterceptor } from './core/interceptors/http.interceptor';

export const appConfig: ApplicationConfig = {
  providers: [
    provideZoneChangeDetection({ eventCoalescing: true }),
    provideRouter(routes),
    provideHttpClient(
      withInterceptors([HttpInterceptor])
    )
  ]
};
"#
}

pub fn main_layout_ts() -> &'static str {
    r#"import { Component } from '@angular/core';
import { RouterOutlet } from '@angular/router';

@Component({
  selector: 'app-main-layout',
  standalone: true,
  imports: [RouterOutlet],
  templateUrl: './main-layout.html',
  styleUrls: ['./main-layout.scss']
})
export class MainLayout {}
"#
}

pub fn main_layout_html() -> &'static str {
    r#"<div class="main-layout">
  <header class="header">
    <div class="container">
      <h1>My Application</h1>
    </div>
  </header>

  <main class="content">
    <div class="container">
      <router-outlet />
    </div>
  </main>

  <footer class="footer">
    <div class="container">
      <p>My Application</p>
    </div>
  </footer>
</div>
"#
}

pub fn main_layout_scss() -> &'static str {
    r#".main-layout {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}

.header {
  background-color: #333;
  color: white;
  padding: 1rem 0;
}

.content {
  flex: 1;
  padding: 2rem 0;
}

.footer {
  background-color: #f5f5f5;
  padding: 1rem 0;
  margin-top: auto;
  text-align: center;
}
"#
}

pub fn app_component() -> &'static str {
    r#"import { Component } from '@angular/core';
import { RouterOutlet } from '@angular/router';

@Component({
  selector: 'app-root',
  standalone: true,
  imports: [RouterOutlet],
  template: '<router-outlet />'
})
export class App {}
"#
}

pub fn app_routes() -> &'static str {
    "import { Routes } from '@angular/router';\n\nexport const routes: Routes = [];\n"
}
